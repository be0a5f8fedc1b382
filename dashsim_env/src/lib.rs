//! DashSim Environment Abstraction Layer
//!
//! This crate provides the abstraction allowing the DashSim engine to run
//! against both the **real page runtime** (tokio timers, OS randomness) and
//! the **fixture harness** (virtual clock, seeded randomness).
//!
//! # Core Concept: Capability Seams
//!
//! The engine never touches the page or the clock directly. Everything
//! non-deterministic or page-shaped goes through two narrow traits:
//! - Time and randomness (`now()`, `sleep()`, `walk_step()`) via [`DashContext`]
//! - The dashboard cards (`read_value()`, `write_value()`, controls) via [`MetricSink`]
//!
//! With both seams virtualized, any live-mode fixture becomes reproducible
//! from its seed number.
//!
//! # Example
//!
//! ```ignore
//! use dashsim_env::{DashContext, MetricSink, PageLifetime};
//!
//! async fn live_loop<Ctx: DashContext, S: MetricSink>(
//!     ctx: &Ctx,
//!     sink: &S,
//!     lifetime: &PageLifetime,
//! ) {
//!     while lifetime.is_live() {
//!         ctx.sleep(Duration::from_millis(1500)).await;
//!         tick_all(ctx, sink);
//!     }
//! }
//! ```

mod context;
mod sink;
mod types;
mod error;
mod tokio_impl;

pub use context::{DashContext, PageLifetime};
pub use sink::MetricSink;
pub use types::{PageSpec, CardSpec, ControlSpec};
pub use error::EnvError;
pub use tokio_impl::TokioContext;
