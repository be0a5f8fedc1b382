//! Seeded deterministic value derivation.

use crate::hash::hash_u32;
use crate::metrics::MetricDefinition;
use dashsim_env::MetricSink;
use tracing::debug;

/// Derives one deterministic integer in `[min, max]` from a seed and a
/// metric key.
///
/// Pure: identical `(seed, key, min, max)` yields the identical integer,
/// in-process and across runs. The seed and key are joined with `"::"`
/// before hashing so `("12", "3x")` and `("123", "x")` diverge.
pub fn seeded_int(seed: &str, key: &str, min: i64, max: i64) -> i64 {
    let range = max.saturating_sub(min).max(0);
    if range == 0 {
        return min;
    }
    let u = hash_u32(&format!("{}::{}", seed, key));
    min + (u64::from(u) % (range as u64 + 1)) as i64
}

/// Writes the seeded value of every metric to the sink, once, in
/// declaration order. A card missing from the sink skips that metric.
pub fn seed_all<S: MetricSink>(sink: &S, seed: &str, defs: &[MetricDefinition]) {
    for def in defs {
        let value = seeded_int(seed, &def.key, def.min, def.max);
        if !sink.write_value(&def.sink_id, value) {
            debug!("skipping seeded write for {}: card not found", def.sink_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::default_metrics;
    use crate::testutil::TestSink;

    #[test]
    fn test_reference_fixture() {
        // seed "123", key "orders", range [0, 2000]:
        // hash("123::orders") == 3309397850, 3309397850 % 2001 == 1979
        assert_eq!(seeded_int("123", "orders", 0, 2000), 1979);
        assert_eq!(seeded_int("123", "tickets", 0, 500), 99);
        assert_eq!(seeded_int("123", "incidents", 0, 50), 48);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..50 {
            assert_eq!(seeded_int("42", "orders", 0, 2000), 401);
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        assert_eq!(seeded_int("123", "orders", 7, 7), 7);
        assert_eq!(seeded_int("", "x", -3, -3), -3);
    }

    #[test]
    fn test_output_in_range() {
        for seed in ["a", "b", "123", "hello world", ""] {
            for (min, max) in [(0, 2000), (0, 1), (-10, 10), (5, 50)] {
                let v = seeded_int(seed, "orders", min, max);
                assert!(v >= min && v <= max, "{} out of [{}, {}]", v, min, max);
            }
        }
    }

    #[test]
    fn test_seed_all_writes_every_card() {
        let sink = TestSink::reference();
        seed_all(&sink, "123", &default_metrics());

        assert_eq!(sink.value("metric-orders"), "1979");
        assert_eq!(sink.value("metric-tickets"), "99");
        assert_eq!(sink.value("metric-incidents"), "48");
    }

    #[test]
    fn test_seed_all_skips_missing_cards() {
        let sink = TestSink::reference();
        let mut defs = default_metrics();
        defs[1].sink_id = "metric-nonexistent".to_string();

        seed_all(&sink, "123", &defs);

        assert_eq!(sink.value("metric-orders"), "1979");
        // Untouched authored value
        assert_eq!(sink.value("metric-tickets"), "87");
    }
}
