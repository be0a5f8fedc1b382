//! In-memory metric sink standing in for the dashboard page.

use dashsim_env::{CardSpec, ControlSpec, EnvError, MetricSink, PageSpec};
use std::sync::Mutex;

struct MemoryCard {
    id: String,
    title: String,
    value: String,
    controls: Vec<ControlSpec>,
}

/// Card store backing fixture replays.
///
/// Holds the same state a browser adapter would read off the page:
/// per-card display text and control disabled flags, in declaration
/// order. Mutation goes through the `MetricSink` trait so the engine
/// cannot tell it apart from a real page.
pub struct MemorySink {
    cards: Mutex<Vec<MemoryCard>>,
}

impl MemorySink {
    /// Builds a sink from a validated page description.
    pub fn from_spec(spec: &PageSpec) -> Result<Self, EnvError> {
        spec.validate()?;
        Ok(Self::build(spec))
    }

    /// Builds a sink for the built-in sample page.
    pub fn sample() -> Self {
        // The sample spec is statically well-formed
        Self::build(&PageSpec::sample())
    }

    fn build(spec: &PageSpec) -> Self {
        let cards = spec
            .cards
            .iter()
            .map(|card| MemoryCard {
                id: card.id.clone(),
                title: card.title.clone(),
                value: card.value.clone(),
                controls: card.controls.clone(),
            })
            .collect();
        Self {
            cards: Mutex::new(cards),
        }
    }

    /// Captures the current page state as a spec, for fixture exports
    /// and assertions.
    pub fn snapshot(&self) -> Vec<CardSpec> {
        let cards = self.cards.lock().unwrap();
        cards
            .iter()
            .map(|card| CardSpec {
                id: card.id.clone(),
                title: card.title.clone(),
                value: card.value.clone(),
                controls: card.controls.clone(),
            })
            .collect()
    }
}

impl MetricSink for MemorySink {
    fn read_value(&self, sink_id: &str) -> Option<String> {
        let cards = self.cards.lock().unwrap();
        cards
            .iter()
            .find(|card| card.id == sink_id)
            .map(|card| card.value.clone())
    }

    fn write_value(&self, sink_id: &str, value: i64) -> bool {
        let mut cards = self.cards.lock().unwrap();
        match cards.iter_mut().find(|card| card.id == sink_id) {
            Some(card) => {
                card.value = value.to_string();
                true
            }
            None => false,
        }
    }

    fn set_control_disabled(&self, sink_id: &str, control_index: usize, disabled: bool) -> bool {
        let mut cards = self.cards.lock().unwrap();
        match cards
            .iter_mut()
            .find(|card| card.id == sink_id)
            .and_then(|card| card.controls.get_mut(control_index))
        {
            Some(control) => {
                control.disabled = disabled;
                true
            }
            None => false,
        }
    }

    fn control_disabled(&self, sink_id: &str, control_index: usize) -> Option<bool> {
        let cards = self.cards.lock().unwrap();
        cards
            .iter()
            .find(|card| card.id == sink_id)
            .and_then(|card| card.controls.get(control_index))
            .map(|control| control.disabled)
    }
}
