//! Financial Planner - scenario projection and portfolio analysis engine
//!
//! This library provides:
//! - Monthly-compounding projections for goal-based savings plans
//! - Annual per-asset growth and health indicators for existing portfolios
//! - Risk-profile return resolution and asset-class default tables
//! - Side-by-side comparison of several scenarios
//! - An in-memory, copy-on-write scenario list

pub mod assumptions;
pub mod comparison;
pub mod error;
pub mod planner;
pub mod portfolio;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AssetClass, RiskProfile};
pub use comparison::{Comparison, ComparisonRow, ScenarioRunner};
pub use error::{PlannerError, PlannerResult};
pub use planner::ScenarioBook;
pub use portfolio::{AnalysisConfig, PortfolioAnalysis, PortfolioAnalyzer};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use scenario::{AssetAllocation, Dependent, GoalType, LifeEvent, Scenario, ScenarioKind};
