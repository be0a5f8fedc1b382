//! Fixture runner - replays one page load deterministically.

use crate::context::VirtualContext;
use crate::exporter::{FixtureError, FixtureExport, FixtureFrame};
use crate::sink::MemorySink;
use dashsim_core::simulator::TICK_PERIOD;
use dashsim_core::ticker::tick_all;
use dashsim_core::{SimulationMode, Simulator, StartupParams};
use dashsim_env::{DashContext, PageSpec};
use tracing::{debug, info};

/// Replays page loads against the in-memory dashboard.
///
/// Instead of spawning the engine's live timer, the runner drives the
/// virtual clock itself: advance one period, tick every metric, capture
/// a frame. Identical (params, page, rng_seed) input always produces an
/// identical fixture document.
pub struct FixtureRunner {
    /// RNG seed for live-mode walk steps
    rng_seed: u64,

    /// Live ticks to replay after the immediate startup tick
    ticks: u64,
}

impl FixtureRunner {
    /// Creates a runner with the given RNG seed.
    pub fn new(rng_seed: u64) -> Self {
        Self { rng_seed, ticks: 10 }
    }

    /// Sets how many live ticks to replay.
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Replays one page load and returns the captured fixture document.
    pub fn run(&self, params: &StartupParams, spec: &PageSpec) -> Result<FixtureExport, FixtureError> {
        let sink = MemorySink::from_spec(spec)?;
        let ctx = VirtualContext::new(self.rng_seed);
        let sim = Simulator::from_params(params);

        info!(
            "replaying page load: mode={} rng_seed={}",
            sim.mode().name(),
            self.rng_seed
        );

        let seed = match sim.mode() {
            SimulationMode::Seeded(seed) => Some(seed.clone()),
            _ => None,
        };
        let mut export = FixtureExport::new(sim.mode().name(), seed, self.rng_seed, TICK_PERIOD);
        export.metrics = sim.metrics().to_vec();

        // Startup pass: rules in every mode, then the mode's one-shot work
        sim.start(&ctx, &sink);
        export.add_frame(FixtureFrame::capture(ctx.now(), &sink, sim.metrics()));

        // Live mode keeps ticking on the virtual clock
        if matches!(sim.mode(), SimulationMode::Live) {
            for tick in 0..self.ticks {
                ctx.advance_time(TICK_PERIOD);
                tick_all(&ctx, &sink, sim.metrics());
                export.add_frame(FixtureFrame::capture(ctx.now(), &sink, sim.metrics()));
                debug!("  tick {} at t={}ms", tick + 1, ctx.now().as_millis());
            }
        }

        export.finalize(sink.snapshot());
        Ok(export)
    }
}
