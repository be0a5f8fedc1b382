//! Metric definitions - the fixed set of simulated dashboard metrics.

use serde::{Deserialize, Serialize};

/// One simulated metric and the card it writes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Stable key mixed into the seeded hash input
    pub key: String,

    /// Card identifier in the sink
    pub sink_id: String,

    /// Inclusive lower bound
    pub min: i64,

    /// Inclusive upper bound. Invariant: `min <= max`.
    pub max: i64,
}

impl MetricDefinition {
    /// Creates a definition. Debug builds assert the range invariant.
    pub fn new(key: impl Into<String>, sink_id: impl Into<String>, min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "metric range inverted: {} > {}", min, max);
        Self {
            key: key.into(),
            sink_id: sink_id.into(),
            min,
            max,
        }
    }
}

/// The reference dashboard's three metrics, in declaration order.
///
/// Live ticks and seeded writes both walk this order; tests rely on it.
pub fn default_metrics() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new("orders", "metric-orders", 0, 2000),
        MetricDefinition::new("tickets", "metric-tickets", 0, 500),
        MetricDefinition::new("incidents", "metric-incidents", 0, 50),
    ]
}
