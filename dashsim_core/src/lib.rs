//! DashSim Core - Metric Simulation Engine for the Sample Dashboard
//!
//! Drives synthetic metric values and demo UI states on a sample dashboard
//! page, producing reproducible fixtures for automated browser testing.
//! One of three modes runs per page load:
//! 1. **Static**: authored markup values are left untouched
//! 2. **Seeded**: every value derived once, deterministically, from a seed string
//! 3. **Live**: bounded random-walk ticks on a repeating 1500 ms timer

pub mod hash;
pub mod seeded;
pub mod mode;
pub mod metrics;
pub mod rules;
pub mod ticker;
pub mod simulator;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export key types for convenience
pub use hash::hash_u32;
pub use seeded::seeded_int;
pub use mode::{SimulationMode, StartupParams};
pub use metrics::{default_metrics, MetricDefinition};
pub use rules::{apply_rules, default_rules, DisabledRule};
pub use simulator::{Simulator, TICK_PERIOD};
