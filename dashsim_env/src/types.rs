//! Common types for the DashSim environment abstraction.

use crate::error::EnvError;
use serde::{Deserialize, Serialize};

/// Declarative description of a dashboard page: the cards, their authored
/// display values, and their controls.
///
/// This is the data-side analog of the sample page's markup. The fixture
/// harness materializes it into an in-memory sink; a browser adapter would
/// match it against real elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page title (informational, shows up in fixture exports)
    pub title: String,

    /// Cards in declaration order. Order matters: live ticks walk metrics
    /// in this order.
    pub cards: Vec<CardSpec>,
}

/// One dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSpec {
    /// Stable identifier the engine addresses the card by
    pub id: String,

    /// Human-readable card title
    pub title: String,

    /// Authored display value (decimal integer as text)
    pub value: String,

    /// Ordered controls under this card
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

/// One control (button) under a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSpec {
    /// Control label
    pub label: String,

    /// Authored disabled flag
    #[serde(default)]
    pub disabled: bool,
}

impl PageSpec {
    /// The reference dashboard page: three metric cards with authored
    /// values and their demo controls.
    pub fn sample() -> Self {
        Self {
            title: "Sample Dashboard".to_string(),
            cards: vec![
                CardSpec {
                    id: "metric-orders".to_string(),
                    title: "Orders".to_string(),
                    value: "1250".to_string(),
                    controls: vec![
                        ControlSpec { label: "Refresh".to_string(), disabled: false },
                        ControlSpec { label: "Export".to_string(), disabled: false },
                    ],
                },
                CardSpec {
                    id: "metric-tickets".to_string(),
                    title: "Tickets".to_string(),
                    value: "87".to_string(),
                    controls: vec![
                        ControlSpec { label: "Refresh".to_string(), disabled: false },
                        ControlSpec { label: "Export".to_string(), disabled: false },
                    ],
                },
                CardSpec {
                    id: "metric-incidents".to_string(),
                    title: "Incidents".to_string(),
                    value: "3".to_string(),
                    controls: vec![
                        ControlSpec { label: "Acknowledge".to_string(), disabled: false },
                        ControlSpec { label: "Resolve".to_string(), disabled: false },
                    ],
                },
            ],
        }
    }

    /// Validates structural requirements a sink cannot tolerate: every
    /// card needs a non-empty id, and ids must be unique (lookups are
    /// by id).
    pub fn validate(&self) -> Result<(), EnvError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.cards.len());
        for card in &self.cards {
            if card.id.is_empty() {
                return Err(EnvError::invalid("card with empty id"));
            }
            if seen.contains(&card.id.as_str()) {
                return Err(EnvError::DuplicateCard(card.id.clone()));
            }
            seen.push(card.id.as_str());
        }
        Ok(())
    }
}
