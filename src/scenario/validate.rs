//! Editing-boundary validation
//!
//! Engines assume a scenario has passed these checks. Life events outside the
//! projected age range are accepted; they simply never match a year.

use super::{LifeEvent, Scenario};
use crate::error::{PlannerError, PlannerResult};

fn check_amount(id: u32, field: &str, value: f64) -> PlannerResult<()> {
    if !value.is_finite() {
        return Err(PlannerError::invalid(id, format!("{} must be a finite number", field)));
    }
    if value < 0.0 {
        return Err(PlannerError::invalid(id, format!("{} must not be negative (got {})", field, value)));
    }
    Ok(())
}

fn check_score(id: u32, label: &str, field: &str, score: u8) -> PlannerResult<()> {
    if !(1..=10).contains(&score) {
        return Err(PlannerError::invalid(
            id,
            format!("asset '{}': {} must be between 1 and 10 (got {})", label, field, score),
        ));
    }
    Ok(())
}

fn check_events(id: u32, field: &str, events: &[LifeEvent]) -> PlannerResult<()> {
    for event in events {
        check_amount(id, field, event.amount)?;
    }
    Ok(())
}

impl Scenario {
    /// Reject shapes the engines are not expected to handle
    pub fn validate(&self) -> PlannerResult<()> {
        let id = self.id;

        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid(id, "name must not be empty"));
        }
        if self.years == 0 {
            return Err(PlannerError::invalid(id, "years must be greater than zero"));
        }
        if self.start_age().checked_add(self.years).is_none() {
            return Err(PlannerError::invalid(
                id,
                format!("currentAge + years overflows (currentAge {}, years {})", self.start_age(), self.years),
            ));
        }

        check_amount(id, "initialInvestment", self.initial_investment)?;
        check_amount(id, "monthlyInvestment", self.monthly_investment)?;
        check_amount(id, "inflationRatePct", self.inflation_rate_pct)?;
        check_amount(id, "taxRatePct", self.tax_rate_pct)?;
        check_amount(id, "monthlyExpenses", self.monthly_expenses)?;
        check_amount(id, "monthlyIncome", self.monthly_income)?;
        check_amount(id, "monthlySavings", self.monthly_savings)?;

        if let Some(pct) = self.expected_annual_return_pct {
            if !pct.is_finite() || pct <= -100.0 {
                return Err(PlannerError::invalid(
                    id,
                    format!("expectedAnnualReturnPct must be finite and above -100 (got {})", pct),
                ));
            }
        }

        check_events(id, "additionalContributions.amount", &self.additional_contributions)?;
        check_events(id, "withdrawals.amount", &self.withdrawals)?;

        for asset in &self.assets {
            check_amount(id, "assets.currentValue", asset.current_value)?;
            if !asset.annual_growth_rate_pct.is_finite() || asset.annual_growth_rate_pct <= -100.0 {
                return Err(PlannerError::invalid(
                    id,
                    format!("asset '{}': growth rate must be finite and above -100", asset.label),
                ));
            }
            check_score(id, &asset.label, "liquidityScore", asset.liquidity_score)?;
            check_score(id, &asset.label, "riskScore", asset.risk_score)?;
        }

        for dependent in &self.dependents {
            if let Some(cost) = dependent.education_cost_estimate {
                check_amount(id, "dependents.educationCostEstimate", cost)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssetClass;
    use crate::scenario::{AssetAllocation, GoalType};

    fn valid() -> Scenario {
        let mut s = Scenario::new(1, "Retire early", GoalType::Retirement, 20);
        s.initial_investment = 50_000.0;
        s.monthly_investment = 5_000.0;
        s
    }

    #[test]
    fn test_valid_scenario_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_zero_years_rejected() {
        let mut s = valid();
        s.years = 0;
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("years"));
    }

    #[test]
    fn test_negative_and_nan_amounts_rejected() {
        let mut s = valid();
        s.monthly_investment = -1.0;
        assert!(s.validate().is_err());

        let mut s = valid();
        s.initial_investment = f64::NAN;
        assert!(s.validate().is_err());

        let mut s = valid();
        s.withdrawals.push(LifeEvent::new(10, f64::INFINITY));
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_messages_name_json_keys() {
        let mut s = valid();
        s.inflation_rate_pct = -2.0;
        assert!(s.validate().unwrap_err().to_string().contains("inflationRatePct"));

        let mut s = valid();
        s.tax_rate_pct = f64::NAN;
        assert!(s.validate().unwrap_err().to_string().contains("taxRatePct"));

        let mut s = valid();
        s.expected_annual_return_pct = Some(-100.0);
        assert!(s.validate().unwrap_err().to_string().contains("expectedAnnualReturnPct"));
    }

    #[test]
    fn test_age_overflow_rejected() {
        let mut s = valid();
        s.current_age = Some(u32::MAX);
        s.years = 1;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidScenario { id: 1, .. }));
        assert!(err.to_string().contains("currentAge"));

        s.current_age = Some(u32::MAX - 1);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_event_age_accepted() {
        let mut s = valid();
        s.additional_contributions.push(LifeEvent::new(95, 100_000.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_asset_scores_checked() {
        let mut s = Scenario::portfolio(3, "Review", 40, 15);
        s.assets.push(AssetAllocation::from_class(AssetClass::Gold, "Gold", 10_000.0).with_scores(0, 5));
        assert!(s.validate().is_err());

        s.assets[0] = s.assets[0].clone().with_scores(10, 11);
        assert!(s.validate().is_err());

        s.assets[0] = s.assets[0].clone().with_scores(10, 10);
        assert!(s.validate().is_ok());
    }
}
