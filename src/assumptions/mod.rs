//! Planning assumptions: risk profile returns and asset-class defaults

mod product;
mod risk;

pub use product::{AssetClass, AssetClassDefaults};
pub use risk::{resolve_annual_return, RiskProfile};
