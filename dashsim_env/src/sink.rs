//! Metric sink abstraction - the dashboard page seen through a keyhole.

/// Abstraction for the dashboard cards the engine reads and writes.
///
/// # Implementations
///
/// - **Production**: a DOM adapter addressing cards by test id
/// - **Fixtures**: `MemorySink`, an in-memory card store
///
/// # Addressing
///
/// ```text
/// Engine                       Sink
///   |                            |
///   |-- read_value("metric-orders") ------> "1250"
///   |-- write_value("metric-orders", 1274)  |
///   |-- set_control_disabled(               |
///   |       "metric-orders", 1, true) ----> Export button greyed out
/// ```
///
/// # Failure model
///
/// The engine is best-effort: a missing card or control index is reported
/// through the return value and the engine skips that metric or rule.
/// Nothing here returns an error.
pub trait MetricSink: Send + Sync + 'static {
    /// Returns the raw display text of a card's value, if the card exists.
    ///
    /// The text is whatever was authored or last written - callers parse it.
    fn read_value(&self, sink_id: &str) -> Option<String>;

    /// Writes a metric value to a card's display.
    ///
    /// Returns false if no card with `sink_id` exists (the write is dropped).
    fn write_value(&self, sink_id: &str, value: i64) -> bool;

    /// Sets the disabled flag of the Nth control under a card (0-based,
    /// scoped to that card only).
    ///
    /// Returns false if the card or the control index does not exist.
    fn set_control_disabled(&self, sink_id: &str, control_index: usize, disabled: bool) -> bool;

    /// Reads back a control's disabled flag, if the card and index exist.
    fn control_disabled(&self, sink_id: &str, control_index: usize) -> Option<bool>;
}
