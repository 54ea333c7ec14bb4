//! Built-in starting scenarios

use super::{AssetAllocation, Dependent, GoalType, LifeEvent, Scenario};
use crate::assumptions::{AssetClass, RiskProfile};

/// Illustrative scenarios offered as starting points
pub fn presets() -> Vec<Scenario> {
    let mut retirement = Scenario::new(1, "Retirement corpus", GoalType::Retirement, 25);
    retirement.initial_investment = 100_000.0;
    retirement.monthly_investment = 10_000.0;
    retirement.risk_profile = RiskProfile::Moderate;
    retirement.inflation_rate_pct = 5.0;
    retirement.tax_rate_pct = 10.0;
    retirement.current_age = Some(35);

    let mut education = Scenario::new(2, "Child's higher education", GoalType::Education, 15);
    education.initial_investment = 50_000.0;
    education.monthly_investment = 8_000.0;
    education.risk_profile = RiskProfile::Aggressive;
    education.inflation_rate_pct = 6.0;
    education.current_age = Some(32);
    education.withdrawals.push(LifeEvent::new(46, 1_500_000.0));

    let mut home = Scenario::new(3, "Home down payment", GoalType::HomePurchase, 7);
    home.initial_investment = 200_000.0;
    home.monthly_investment = 25_000.0;
    home.risk_profile = RiskProfile::Conservative;
    home.inflation_rate_pct = 6.0;
    home.current_age = Some(29);
    home.additional_contributions.push(LifeEvent::new(32, 300_000.0));

    let mut review = Scenario::portfolio(4, "Family portfolio review", 38, 22);
    review.retirement_age = Some(60);
    review.monthly_expenses = 60_000.0;
    review.monthly_income = 150_000.0;
    review.monthly_savings = 40_000.0;
    review.inflation_rate_pct = 6.0;
    review.assets = vec![
        AssetAllocation::from_class(AssetClass::Savings, "Savings account", 300_000.0),
        AssetAllocation::from_class(AssetClass::FixedDeposit, "Bank FDs", 500_000.0),
        AssetAllocation::from_class(AssetClass::EquityFund, "Index funds", 1_200_000.0),
        AssetAllocation::from_class(AssetClass::RetirementFund, "EPF", 900_000.0),
        AssetAllocation::from_class(AssetClass::SukanyaSamriddhi, "SSY account", 300_000.0)
            .with_growth_rate(7.6),
        AssetAllocation::from_class(AssetClass::RealEstate, "Apartment", 6_000_000.0),
        AssetAllocation::from_class(AssetClass::Gold, "Gold", 400_000.0),
    ];
    review.dependents = vec![Dependent {
        relation: "Daughter".into(),
        current_age: 9,
        years_until_education_goal: Some(9),
        education_cost_estimate: Some(3_000_000.0),
    }];

    vec![retirement, education, home, review]
}
