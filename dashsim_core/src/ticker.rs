//! Bounded random-walk tick mechanics for live mode.

use crate::metrics::MetricDefinition;
use dashsim_env::{DashContext, MetricSink};
use tracing::debug;

/// Largest single live-tick increment. Steps are drawn uniformly from
/// `[0, WALK_STEP_MAX]` - never negative, so live values only rise until
/// they saturate at a metric's `max` and stay pinned there. Downstream
/// fixtures depend on the saturating behavior.
pub const WALK_STEP_MAX: u32 = 24;

/// Parses a display value as an integer and clamps it into `[min, max]`.
///
/// Unparsable text (authored placeholders, tampered markup) is treated as
/// `min`.
pub fn clamp_int(raw: &str, min: i64, max: i64) -> i64 {
    let n = raw.trim().parse::<i64>().unwrap_or(min);
    n.clamp(min, max)
}

/// Advances one metric by a bounded non-negative random step.
///
/// Reads the current display text, steps it, clamps to the metric's
/// range, writes back. A card missing from the sink leaves that metric
/// untouched.
pub fn tick_metric<C: DashContext, S: MetricSink>(ctx: &C, sink: &S, def: &MetricDefinition) {
    let raw = match sink.read_value(&def.sink_id) {
        Some(raw) => raw,
        None => {
            debug!("skipping tick for {}: card not found", def.sink_id);
            return;
        }
    };

    let current = clamp_int(&raw, def.min, def.max);
    let delta = i64::from(ctx.walk_step(WALK_STEP_MAX));
    let next = current.saturating_add(delta).clamp(def.min, def.max);
    sink.write_value(&def.sink_id, next);
}

/// One full tick: every metric advanced once, in declaration order.
///
/// A tick completes for all metrics before the caller can start another;
/// two ticks never interleave.
pub fn tick_all<C: DashContext, S: MetricSink>(ctx: &C, sink: &S, defs: &[MetricDefinition]) {
    for def in defs {
        tick_metric(ctx, sink, def);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::default_metrics;
    use crate::testutil::{FixedStepContext, TestSink};

    #[test]
    fn test_clamp_int() {
        assert_eq!(clamp_int("1250", 0, 2000), 1250);
        assert_eq!(clamp_int("  42 ", 0, 2000), 42);
        assert_eq!(clamp_int("9999", 0, 2000), 2000);
        assert_eq!(clamp_int("-5", 0, 2000), 0);
        assert_eq!(clamp_int("-5", -10, 10), -5);
    }

    #[test]
    fn test_clamp_int_unparsable_is_min() {
        for raw in ["", "n/a", "12.5", "0x10", "–3"] {
            assert_eq!(clamp_int(raw, 7, 50), 7);
        }
    }

    #[test]
    fn test_tick_steps_by_delta() {
        let sink = TestSink::reference();
        let ctx = FixedStepContext::new(10);
        let defs = default_metrics();

        tick_metric(&ctx, &sink, &defs[0]);
        assert_eq!(sink.value("metric-orders"), "1260");
    }

    #[test]
    fn test_tick_zero_delta_keeps_value() {
        let sink = TestSink::reference();
        let ctx = FixedStepContext::new(0);

        tick_metric(&ctx, &sink, &default_metrics()[0]);
        assert_eq!(sink.value("metric-orders"), "1250");
    }

    #[test]
    fn test_tick_saturates_at_max() {
        let sink = TestSink::reference();
        sink.set_value("metric-orders", "1995");
        let ctx = FixedStepContext::new(24);
        let defs = default_metrics();

        tick_metric(&ctx, &sink, &defs[0]);
        assert_eq!(sink.value("metric-orders"), "2000");

        // Pinned once there
        tick_metric(&ctx, &sink, &defs[0]);
        assert_eq!(sink.value("metric-orders"), "2000");
    }

    #[test]
    fn test_tick_unparsable_starts_at_min() {
        let sink = TestSink::reference();
        sink.set_value("metric-tickets", "n/a");
        let ctx = FixedStepContext::new(6);

        tick_metric(&ctx, &sink, &default_metrics()[1]);
        assert_eq!(sink.value("metric-tickets"), "6");
    }

    #[test]
    fn test_tick_overrange_value_clamped_first() {
        // A value above max is pulled back into range before stepping
        let sink = TestSink::reference();
        sink.set_value("metric-incidents", "5000");
        let ctx = FixedStepContext::new(0);

        tick_metric(&ctx, &sink, &default_metrics()[2]);
        assert_eq!(sink.value("metric-incidents"), "50");
    }

    #[test]
    fn test_tick_missing_card_is_noop() {
        let sink = TestSink::reference();
        let ctx = FixedStepContext::new(10);
        let def = MetricDefinition::new("ghost", "metric-ghost", 0, 100);

        // Must not panic or touch other cards
        tick_metric(&ctx, &sink, &def);
        assert_eq!(sink.value("metric-orders"), "1250");
    }

    #[test]
    fn test_tick_all_advances_every_metric() {
        let sink = TestSink::reference();
        let ctx = FixedStepContext::new(3);

        tick_all(&ctx, &sink, &default_metrics());
        assert_eq!(sink.value("metric-orders"), "1253");
        assert_eq!(sink.value("metric-tickets"), "90");
        assert_eq!(sink.value("metric-incidents"), "6");
    }
}
