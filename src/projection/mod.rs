//! Projection engine for cash-flow scenarios

mod engine;
mod points;
mod state;

pub use engine::{monthly_rate, ProjectionConfig, ProjectionEngine};
pub use points::{AssetValuePoint, ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use state::ProjectionState;
