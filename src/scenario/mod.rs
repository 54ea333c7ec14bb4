//! Scenario data structures, validation and loading

mod data;
pub mod loader;
mod presets;
mod validate;

pub use data::{AssetAllocation, Dependent, GoalType, LifeEvent, Scenario, ScenarioKind};
pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use presets::presets;
