//! The simulator proper - resolved mode, definitions, rules, and the
//! live-mode scheduler.
//!
//! Replaces the original page script's ambient module globals (shared
//! config, interval handle) with an explicit value constructed once at
//! startup and handed to the scheduler.
//!
//! # Usage
//!
//! ```ignore
//! use dashsim_core::{Simulator, StartupParams};
//! use dashsim_env::{PageLifetime, TokioContext};
//!
//! let sim = Arc::new(Simulator::from_params(&params));
//! let lifetime = PageLifetime::new();
//! sim.spawn(&ctx, &sink, &lifetime);
//! // ... page unload:
//! lifetime.teardown();
//! ```

use crate::metrics::{default_metrics, MetricDefinition};
use crate::mode::{SimulationMode, StartupParams};
use crate::rules::{apply_rules, default_rules, DisabledRule};
use crate::seeded::seed_all;
use crate::ticker::tick_all;
use dashsim_env::{DashContext, MetricSink, PageLifetime};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Fixed live-mode tick period.
pub const TICK_PERIOD: Duration = Duration::from_millis(1500);

/// One page load's simulation state.
///
/// Holds the resolved mode, the metric definitions, and the rule list.
/// Immutable after construction; the engine is the sole writer to the
/// sink, a rendering layer the sole reader.
#[derive(Debug, Clone)]
pub struct Simulator {
    mode: SimulationMode,
    metrics: Vec<MetricDefinition>,
    rules: Vec<DisabledRule>,
}

impl Simulator {
    /// Creates a simulator with explicit definitions and rules.
    pub fn new(
        mode: SimulationMode,
        metrics: Vec<MetricDefinition>,
        rules: Vec<DisabledRule>,
    ) -> Self {
        Self {
            mode,
            metrics,
            rules,
        }
    }

    /// Resolves startup parameters against the reference metric set and
    /// demo rules.
    pub fn from_params(params: &StartupParams) -> Self {
        Self::new(
            SimulationMode::resolve(params),
            default_metrics(),
            default_rules(),
        )
    }

    /// The resolved mode.
    pub fn mode(&self) -> &SimulationMode {
        &self.mode
    }

    /// The metric definitions, in declaration order.
    pub fn metrics(&self) -> &[MetricDefinition] {
        &self.metrics
    }

    /// Startup pass, run exactly once per page load.
    ///
    /// Applies the disabled-control rules first - in every mode - then
    /// dispatches: nothing for Static (authored values stay untouched), a
    /// one-shot seeded write for Seeded, the immediate first tick for
    /// Live. The repeating live timer is the caller's business (see
    /// [`Simulator::run`]).
    pub fn start<C: DashContext, S: MetricSink>(&self, ctx: &C, sink: &S) {
        apply_rules(sink, &self.rules);
        info!("simulation mode: {}", self.mode.name());

        match &self.mode {
            SimulationMode::Static => {}
            SimulationMode::Seeded(seed) => seed_all(sink, seed, &self.metrics),
            SimulationMode::Live => tick_all(ctx, sink, &self.metrics),
        }
    }

    /// Runs the full page lifecycle: the startup pass, then - in Live
    /// mode only - the repeating tick loop until the page is torn down.
    ///
    /// One tick completes for all metrics before the next sleep begins;
    /// firings never overlap. There is no other way to stop the loop:
    /// resetting state means tearing the lifetime down and starting over,
    /// as a page reload would.
    pub async fn run<C: DashContext, S: MetricSink>(
        &self,
        ctx: &C,
        sink: &S,
        lifetime: &PageLifetime,
    ) {
        self.start(ctx, sink);
        if !matches!(self.mode, SimulationMode::Live) {
            return;
        }

        while lifetime.is_live() {
            ctx.sleep(TICK_PERIOD).await;
            if !lifetime.is_live() {
                break;
            }
            tick_all(ctx, sink, &self.metrics);
            debug!("live tick at t={:?}", ctx.now());
        }
    }

    /// Spawns the lifecycle as a background task on the context.
    ///
    /// The task holds clones of the Arc'd simulator, context and sink, so
    /// its lifetime is bound to the token alone.
    pub fn spawn<C, S>(self: &Arc<Self>, ctx: &Arc<C>, sink: &Arc<S>, lifetime: &PageLifetime)
    where
        C: DashContext,
        S: MetricSink,
    {
        let sim = Arc::clone(self);
        let task_ctx = Arc::clone(ctx);
        let task_sink = Arc::clone(sink);
        let task_lifetime = lifetime.clone();

        ctx.spawn("dashsim-live", async move {
            sim.run(task_ctx.as_ref(), task_sink.as_ref(), &task_lifetime)
                .await;
        });
    }
}
