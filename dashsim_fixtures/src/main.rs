//! DashSim Fixture CLI
//!
//! Replay dashboard page loads deterministically and export the captured
//! fixtures for browser tests.

use clap::Parser;
use dashsim_core::StartupParams;
use dashsim_env::PageSpec;
use dashsim_fixtures::{load_page_spec, FixtureRunner};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// DashSim deterministic fixture harness
#[derive(Parser, Debug)]
#[command(name = "dashsim-fixtures")]
#[command(about = "Replay dashboard page loads and capture fixtures", long_about = None)]
struct Args {
    /// Startup `mode` parameter ("static" forces static mode)
    #[arg(short, long)]
    mode: Option<String>,

    /// Startup `seed` parameter (non-blank selects seeded mode)
    #[arg(short, long)]
    seed: Option<String>,

    /// RNG seed for live-mode walk steps (0 = random from time)
    #[arg(long, default_value = "42")]
    rng_seed: u64,

    /// Live ticks to replay after the immediate startup tick
    #[arg(short, long, default_value = "10")]
    ticks: u64,

    /// Page description JSON file (defaults to the built-in sample page)
    #[arg(short, long)]
    page: Option<String>,

    /// Write the fixture document to this path
    #[arg(long)]
    export: Option<String>,

    /// JSON output for CI parsing
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if !args.json {
        info!("DashSim Fixture Harness v0.1.0");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    // Load the page description
    let spec = match &args.page {
        Some(path) => match load_page_spec(path) {
            Ok(spec) => spec,
            Err(e) => {
                error!("Failed to load page spec {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => PageSpec::sample(),
    };

    // Determine the RNG seed
    let rng_seed = if args.rng_seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    } else {
        args.rng_seed
    };

    let params = StartupParams::new(args.mode.as_deref(), args.seed.as_deref());
    let runner = FixtureRunner::new(rng_seed).with_ticks(args.ticks);

    let export = match runner.run(&params, &spec) {
        Ok(export) => export,
        Err(e) => {
            error!("Replay failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.export {
        if let Err(e) = export.write_to_file(path) {
            error!("Failed to write export: {:?}", e);
            std::process::exit(1);
        }
        if !args.json {
            info!("Exported {} frames to {}", export.frames.len(), path);
        }
    }

    if args.json {
        // JSON output for CI parsing
        println!("{}", serde_json::to_string_pretty(&export).unwrap());
    } else {
        info!("");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!(
            "  Mode: {} | Frames: {} | RNG seed: {}",
            export.mode,
            export.frames.len(),
            rng_seed
        );
        if let Some(frame) = export.frames.last() {
            for value in &frame.values {
                info!("  {} = {}", value.key, value.value);
            }
        }
        for card in &export.final_cards {
            let disabled: Vec<&str> = card
                .controls
                .iter()
                .filter(|control| control.disabled)
                .map(|control| control.label.as_str())
                .collect();
            if !disabled.is_empty() {
                info!("  {} disabled controls: {}", card.id, disabled.join(", "));
            }
        }
    }
}
