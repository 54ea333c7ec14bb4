//! Portfolio health indicators

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assumptions::AssetClass;
use crate::scenario::AssetAllocation;

/// Value held in one asset class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassShare {
    pub asset_class: AssetClass,
    pub value: f64,
    /// Share of total portfolio value, 0-100
    pub percentage: f64,
}

/// How well earmarked assets cover a dependent's education cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationFunding {
    pub relation: String,
    /// Projection year in which the cost falls due
    pub target_year: u32,
    pub cost_estimate: f64,
    /// Earmarked assets grown to the target year
    pub projected_value: f64,
    /// Capped at 100
    pub funding_percentage: f64,
    pub shortfall: f64,
}

/// Projected corpus at retirement against a multiple of annual expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementReadiness {
    pub retirement_year: u32,
    pub projected_corpus: f64,
    pub target_corpus: f64,
    /// Capped at 100
    pub funding_percentage: f64,
    pub shortfall: f64,
    /// Corpus divided by annual expenses, uncapped
    pub years_of_expenses_covered: f64,
}

/// Derived portfolio indicators, recomputed on every projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    pub current_total_value: f64,
    pub asset_class_distribution: Vec<AssetClassShare>,
    pub weighted_risk_score: f64,
    pub weighted_liquidity_score: f64,
    /// Value of assets at or above the liquidity threshold
    pub liquid_assets_value: f64,
    pub emergency_fund_months: f64,
    pub education_goal_funding: Option<EducationFunding>,
    pub retirement_readiness: Option<RetirementReadiness>,
}

/// Ratio guarded against zero or non-finite denominators
pub(crate) fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}

/// Group asset values by class; percentages are 0 when the portfolio is empty
pub fn asset_class_distribution(assets: &[AssetAllocation], total_value: f64) -> Vec<AssetClassShare> {
    let mut by_class: BTreeMap<AssetClass, f64> = BTreeMap::new();
    for asset in assets {
        *by_class.entry(asset.asset_class).or_insert(0.0) += asset.current_value;
    }

    by_class
        .into_iter()
        .map(|(asset_class, value)| AssetClassShare {
            asset_class,
            value,
            percentage: safe_ratio(value, total_value) * 100.0,
        })
        .collect()
}

/// Value-weighted average of a per-asset score
pub fn weighted_score<F>(assets: &[AssetAllocation], total_value: f64, score: F) -> f64
where
    F: Fn(&AssetAllocation) -> u8,
{
    if total_value <= 0.0 {
        return 0.0;
    }
    assets
        .iter()
        .map(|a| score(a) as f64 * a.current_value / total_value)
        .sum()
}

/// Liquid asset value, and the months of expenses it covers
pub fn emergency_fund(assets: &[AssetAllocation], liquid_threshold: u8, monthly_expenses: f64) -> (f64, f64) {
    let liquid: f64 = assets
        .iter()
        .filter(|a| a.liquidity_score >= liquid_threshold)
        .map(|a| a.current_value)
        .sum();
    (liquid, safe_ratio(liquid, monthly_expenses))
}

/// Percentage of a target covered, capped at 100, with the remaining shortfall
pub(crate) fn funding(projected: f64, target: f64) -> (f64, f64) {
    let pct = (safe_ratio(projected, target) * 100.0).min(100.0);
    (pct, (target - projected).max(0.0))
}
