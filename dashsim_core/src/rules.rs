//! Disabled-control demo rules, applied once at startup.

use dashsim_env::MetricSink;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One declarative demo state: a control under a card starts disabled
/// (or explicitly enabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisabledRule {
    /// Card identifier in the sink
    pub sink_id: String,

    /// 0-based control index, scoped to that card only
    pub control_index: usize,

    /// Disabled flag to set
    pub disabled: bool,
}

/// The reference demo states: the orders card's Export button and the
/// incidents card's Acknowledge button start disabled.
pub fn default_rules() -> Vec<DisabledRule> {
    vec![
        DisabledRule {
            sink_id: "metric-orders".to_string(),
            control_index: 1,
            disabled: true,
        },
        DisabledRule {
            sink_id: "metric-incidents".to_string(),
            control_index: 0,
            disabled: true,
        },
    ]
}

/// Applies every rule to the sink, in list order.
///
/// A rule whose card or control index does not exist is skipped - no
/// error, no retry. Reapplying the list is idempotent.
pub fn apply_rules<S: MetricSink>(sink: &S, rules: &[DisabledRule]) {
    for rule in rules {
        let applied = sink.set_control_disabled(&rule.sink_id, rule.control_index, rule.disabled);
        if !applied {
            debug!(
                "skipping rule for {} control {}: not found",
                rule.sink_id, rule.control_index
            );
        }
    }
}
