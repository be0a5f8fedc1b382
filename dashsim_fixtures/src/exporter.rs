//! JSON import/export: page descriptions in, fixture documents out.

use crate::sink::MemorySink;
use dashsim_core::MetricDefinition;
use dashsim_env::{CardSpec, EnvError, MetricSink, PageSpec};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors from fixture I/O.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// File read/write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page description is structurally invalid
    #[error("Page error: {0}")]
    Page(#[from] EnvError),
}

/// Loads and validates a page description from a JSON file.
pub fn load_page_spec(path: impl AsRef<Path>) -> Result<PageSpec, FixtureError> {
    let json = std::fs::read_to_string(path)?;
    let spec: PageSpec = serde_json::from_str(&json)?;
    spec.validate()?;
    Ok(spec)
}

/// One metric's display state at a point in the replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricValue {
    pub key: String,
    pub sink_id: String,
    /// Raw display text - what a browser assertion would read
    pub value: String,
}

/// All metric values at one point of the replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureFrame {
    /// Virtual time of the capture in milliseconds
    pub time_ms: u64,

    /// Values in metric declaration order
    pub values: Vec<MetricValue>,
}

impl FixtureFrame {
    /// Captures the current sink state for the given metrics.
    pub fn capture(time: Duration, sink: &MemorySink, defs: &[MetricDefinition]) -> Self {
        let values = defs
            .iter()
            .map(|def| MetricValue {
                key: def.key.clone(),
                sink_id: def.sink_id.clone(),
                value: sink.read_value(&def.sink_id).unwrap_or_default(),
            })
            .collect();
        Self {
            time_ms: time.as_millis() as u64,
            values,
        }
    }
}

/// Complete fixture document for one replayed page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureExport {
    /// Resolved mode name
    pub mode: String,

    /// Seed parameter, when one selected seeded mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,

    /// RNG seed driving live-mode walk steps
    pub rng_seed: u64,

    /// Live tick period in milliseconds
    pub tick_period_ms: u64,

    /// Metric definitions in effect for this replay
    pub metrics: Vec<MetricDefinition>,

    /// Frame after startup, then one per live tick
    pub frames: Vec<FixtureFrame>,

    /// Full page state at the end of the replay (values and control
    /// disabled flags)
    pub final_cards: Vec<CardSpec>,
}

impl FixtureExport {
    /// Creates an empty fixture document.
    pub fn new(mode: &str, seed: Option<String>, rng_seed: u64, tick_period: Duration) -> Self {
        Self {
            mode: mode.to_string(),
            seed,
            rng_seed,
            tick_period_ms: tick_period.as_millis() as u64,
            metrics: Vec::new(),
            frames: Vec::new(),
            final_cards: Vec::new(),
        }
    }

    /// Adds a frame.
    pub fn add_frame(&mut self, frame: FixtureFrame) {
        self.frames.push(frame);
    }

    /// Records the final page state.
    pub fn finalize(&mut self, cards: Vec<CardSpec>) {
        self.final_cards = cards;
    }

    /// Writes the document as pretty-printed JSON.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
