//! DashSim Fixture Harness
//!
//! This crate replays full page loads of the DashSim engine against an
//! in-memory dashboard, deterministically: time is a virtual clock and
//! live-mode walk steps come from a seeded ChaCha8 stream. The result is
//! a frame-by-frame fixture document that browser tests can pin against
//! and regenerate bit-for-bit from the same seeds.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      FixtureRunner                        │
//! │  ┌─────────────────┐     ┌───────────────────────────┐    │
//! │  │ VirtualContext  │     │        MemorySink         │    │
//! │  │ (virtual clock, │────►│  (cards, values, control  │    │
//! │  │  seeded steps)  │     │     disabled flags)       │    │
//! │  └─────────────────┘     └───────────────────────────┘    │
//! │            │                         ▲                    │
//! │            ▼                         │                    │
//! │        Simulator ── start() / tick ──┘                    │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use dashsim_core::StartupParams;
//! use dashsim_env::PageSpec;
//! use dashsim_fixtures::FixtureRunner;
//!
//! let params = StartupParams::new(None, Some("123"));
//! let export = FixtureRunner::new(42).run(&params, &PageSpec::sample())?;
//! export.write_to_file("fixtures/seeded-123.json")?;
//! ```

mod context;
mod sink;
mod runner;
mod exporter;

pub use context::VirtualContext;
pub use sink::MemorySink;
pub use runner::FixtureRunner;
pub use exporter::{load_page_spec, FixtureError, FixtureExport, FixtureFrame, MetricValue};
