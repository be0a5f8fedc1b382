//! Error types for the DashSim environment abstraction.

use thiserror::Error;

/// Errors that can occur in the environment abstraction layer.
///
/// Note the engine itself never raises these: a missing card or control
/// during a tick is silently skipped. These cover the one place a hard
/// failure is correct - rejecting a malformed page description before a
/// sink is built from it.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Page spec violates a structural requirement
    #[error("Invalid page spec: {0}")]
    InvalidPageSpec(String),

    /// Two cards share an id, making sink lookups ambiguous
    #[error("Duplicate card id: {0}")]
    DuplicateCard(String),
}

impl EnvError {
    /// Creates an invalid-page-spec error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidPageSpec(msg.into())
    }
}
