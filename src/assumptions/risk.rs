//! Risk profile to expected return mapping

use serde::{Deserialize, Serialize};

/// Qualitative risk appetite of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RiskProfile {
    /// Debt-heavy, capital preservation first
    Conservative,
    /// Balanced equity/debt mix
    #[default]
    Moderate,
    /// Equity-heavy, long horizon
    Aggressive,
}

impl RiskProfile {
    /// Canonical annual return range as (low, high) percentages
    pub fn return_range_pct(&self) -> (f64, f64) {
        match self {
            RiskProfile::Conservative => (6.0, 8.0),
            RiskProfile::Moderate => (10.0, 12.0),
            RiskProfile::Aggressive => (14.0, 16.0),
        }
    }

    /// Expected annual return as a decimal (midpoint of the range)
    pub fn expected_annual_return(&self) -> f64 {
        let (low, high) = self.return_range_pct();
        (low + high) / 2.0 / 100.0
    }

    /// Label used in comparison tables
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

/// Resolve the annual return for a plan.
/// An explicit percentage always wins over the profile midpoint.
pub fn resolve_annual_return(profile: RiskProfile, explicit_pct: Option<f64>) -> f64 {
    match explicit_pct {
        Some(pct) => pct / 100.0,
        None => profile.expected_annual_return(),
    }
}
