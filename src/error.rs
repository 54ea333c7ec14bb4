//! Error types for the planner
//!
//! Only the editing boundary (validation, loading, export) can fail. The
//! projection and analysis engines resolve every degenerate input to zero.

use thiserror::Error;

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors raised while building, loading or exporting scenarios
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Scenario failed validation before reaching an engine
    #[error("Invalid scenario {id}: {reason}")]
    InvalidScenario {
        /// Scenario identifier
        id: u32,
        /// Which rule was broken
        reason: String,
    },

    /// No scenario with this id in the book
    #[error("Unknown scenario: {0}")]
    UnknownScenario(u32),

    /// Two scenarios share an id
    #[error("Duplicate scenario id: {0}")]
    DuplicateScenario(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlannerError {
    pub(crate) fn invalid(id: u32, reason: impl Into<String>) -> Self {
        PlannerError::InvalidScenario {
            id,
            reason: reason.into(),
        }
    }
}
