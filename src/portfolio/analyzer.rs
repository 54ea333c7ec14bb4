//! Annual per-asset growth and portfolio health analysis
//!
//! Unlike the cash-flow engine, holdings here compound once a year, each at
//! its own growth rate.

use log::debug;

use super::metrics::{
    asset_class_distribution, emergency_fund, funding, safe_ratio, weighted_score, EducationFunding,
    PortfolioAnalysis, RetirementReadiness,
};
use crate::assumptions::AssetClass;
use crate::projection::{AssetValuePoint, ProjectionPoint, ProjectionResult};
use crate::scenario::Scenario;

/// Thresholds and targets used when deriving indicators
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Assets with a liquidity score at or above this count as emergency funds
    pub liquid_threshold: u8,

    /// Target retirement corpus as a multiple of annual expenses
    pub retirement_corpus_multiple: f64,

    /// Classes whose value is earmarked for education goals
    pub education_classes: Vec<AssetClass>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            liquid_threshold: 7,
            retirement_corpus_multiple: 25.0,
            education_classes: AssetClass::default_education_classes(),
        }
    }
}

/// Portfolio analysis engine
#[derive(Debug, Clone, Default)]
pub struct PortfolioAnalyzer {
    config: AnalysisConfig,
}

impl PortfolioAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Grow every holding to each year of the horizon and attach the analysis
    pub fn project(&self, scenario: &Scenario) -> ProjectionResult {
        let mut result = ProjectionResult::new(scenario.id, scenario.tax_rate());

        let Some(current_age) = scenario.current_age else {
            debug!("Scenario {} has no current age; returning an empty analysis", scenario.id);
            result.analysis = Some(PortfolioAnalysis::default());
            return result;
        };

        let total_value = scenario.portfolio_value();
        let inflation = scenario.inflation_rate();

        debug!(
            "Analysing portfolio scenario {} ({} assets, value {:.2}) over {} years",
            scenario.id,
            scenario.assets.len(),
            total_value,
            scenario.years
        );

        for year in 0..=scenario.years {
            let asset_values: Vec<AssetValuePoint> = scenario
                .assets
                .iter()
                .map(|a| AssetValuePoint {
                    label: a.label.clone(),
                    asset_class: a.asset_class,
                    value: a.projected_value(year),
                })
                .collect();

            let total_amount: f64 = asset_values.iter().map(|a| a.value).sum();

            result.add_point(ProjectionPoint {
                year,
                age: current_age + year,
                total_amount,
                total_invested_to_date: total_value,
                yearly_return_amount: total_amount - total_value,
                inflation_adjusted_value: total_amount / (1.0 + inflation).powi(year as i32),
                asset_values,
            });
        }

        result.analysis = Some(self.analyze(scenario));
        result
    }

    /// Derive the portfolio health indicators
    pub fn analyze(&self, scenario: &Scenario) -> PortfolioAnalysis {
        if scenario.current_age.is_none() || scenario.assets.is_empty() {
            return PortfolioAnalysis::default();
        }

        let assets = &scenario.assets;
        let total_value = scenario.portfolio_value();
        let (liquid_assets_value, emergency_fund_months) =
            emergency_fund(assets, self.config.liquid_threshold, scenario.monthly_expenses);

        PortfolioAnalysis {
            current_total_value: total_value,
            asset_class_distribution: asset_class_distribution(assets, total_value),
            weighted_risk_score: weighted_score(assets, total_value, |a| a.risk_score),
            weighted_liquidity_score: weighted_score(assets, total_value, |a| a.liquidity_score),
            liquid_assets_value,
            emergency_fund_months,
            education_goal_funding: self.education_funding(scenario),
            retirement_readiness: self.retirement_readiness(scenario),
        }
    }

    /// Funding of the first dependent with an education goal inside the horizon
    fn education_funding(&self, scenario: &Scenario) -> Option<EducationFunding> {
        let (dependent, (target_year, cost)) = scenario
            .dependents
            .iter()
            .find_map(|d| d.education_goal().map(|goal| (d, goal)))?;

        if target_year > scenario.years {
            return None;
        }

        let projected_value: f64 = scenario
            .assets
            .iter()
            .filter(|a| self.config.education_classes.contains(&a.asset_class))
            .map(|a| a.projected_value(target_year))
            .sum();

        let (funding_percentage, shortfall) = funding(projected_value, cost);

        Some(EducationFunding {
            relation: dependent.relation.clone(),
            target_year,
            cost_estimate: cost,
            projected_value,
            funding_percentage,
            shortfall,
        })
    }

    /// Corpus at retirement against `multiple x annual expenses`
    fn retirement_readiness(&self, scenario: &Scenario) -> Option<RetirementReadiness> {
        let retirement_age = scenario.retirement_age?;
        if !scenario.age_range().contains(&retirement_age) {
            return None;
        }

        let retirement_year = retirement_age - scenario.start_age();
        let projected_corpus: f64 = scenario
            .assets
            .iter()
            .map(|a| a.projected_value(retirement_year))
            .sum();

        let annual_expenses = scenario.monthly_expenses * 12.0;
        let target_corpus = self.config.retirement_corpus_multiple * annual_expenses;
        let (funding_percentage, shortfall) = funding(projected_corpus, target_corpus);

        Some(RetirementReadiness {
            retirement_year,
            projected_corpus,
            target_corpus,
            funding_percentage,
            shortfall,
            years_of_expenses_covered: safe_ratio(projected_corpus, annual_expenses),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{AssetAllocation, Dependent};
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use proptest::collection::vec;

    fn daughter(years: u32, cost: f64) -> Dependent {
        Dependent {
            relation: "Daughter".into(),
            current_age: 8,
            years_until_education_goal: Some(years),
            education_cost_estimate: Some(cost),
        }
    }

    #[test]
    fn test_single_real_estate_asset_compounds_annually() {
        let mut s = Scenario::portfolio(1, "Scenario B", 40, 20);
        s.assets.push(
            AssetAllocation::from_class(AssetClass::RealEstate, "Apartment", 6_000_000.0).with_growth_rate(7.0),
        );

        let result = PortfolioAnalyzer::default().project(&s);
        assert_eq!(result.points.len(), 21);

        let last = result.final_point().unwrap();
        assert_eq!(last.age, 60);
        assert_relative_eq!(last.total_amount, 6_000_000.0 * 1.07f64.powi(20), max_relative = 1e-12);
        assert_relative_eq!(last.total_amount, 23_218_106.774_917_1, max_relative = 1e-9);
        assert_relative_eq!(last.yearly_return_amount, last.total_amount - 6_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(last.total_invested_to_date, 6_000_000.0);
        assert_eq!(last.asset_values.len(), 1);
    }

    #[test]
    fn test_monthly_and_annual_models_differ() {
        use crate::projection::ProjectionEngine;
        use crate::scenario::GoalType;

        let mut cash = Scenario::new(2, "Lump sum", GoalType::WealthBuilding, 10);
        cash.initial_investment = 100_000.0;
        cash.expected_annual_return_pct = Some(10.0);
        let monthly = ProjectionEngine::default().project(&cash).summary().final_amount;

        let mut port = Scenario::portfolio(3, "Lump sum", 30, 10);
        port.assets.push(AssetAllocation::from_class(AssetClass::EquityFund, "Fund", 100_000.0).with_growth_rate(10.0));
        let annual = PortfolioAnalyzer::default().project(&port).summary().final_amount;

        // Effective-rate monthly compounding of a lump sum matches annual compounding
        assert_relative_eq!(monthly, annual, max_relative = 1e-9);

        // Contributions are what separate the models: the portfolio path ignores them
        cash.monthly_investment = 1_000.0;
        port.monthly_savings = 1_000.0;
        let monthly = ProjectionEngine::default().project(&cash).summary().final_amount;
        let annual = PortfolioAnalyzer::default().project(&port).summary().final_amount;
        assert!(monthly > annual);
        assert_relative_eq!(annual, 100_000.0 * 1.1f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_empty_portfolio_is_all_zero() {
        let s = Scenario::portfolio(4, "Scenario C", 35, 15);
        let result = PortfolioAnalyzer::default().project(&s);

        let analysis = result.analysis.clone().unwrap();
        assert_eq!(analysis, PortfolioAnalysis::default());
        assert!(analysis.asset_class_distribution.is_empty());
        assert_eq!(result.points.len(), 16);
        assert!(result.points.iter().all(|p| p.total_amount == 0.0 && p.inflation_adjusted_value == 0.0));

        let summary = result.summary();
        assert_eq!(summary.wealth_multiplier, 0.0);
        assert_eq!(summary.cagr, 0.0);
    }

    #[test]
    fn test_missing_current_age_is_all_zero() {
        let mut s = Scenario::portfolio(5, "No age", 35, 15);
        s.current_age = None;
        s.assets.push(AssetAllocation::from_class(AssetClass::Gold, "Gold", 100_000.0));

        let result = PortfolioAnalyzer::default().project(&s);
        assert!(result.points.is_empty());
        assert_eq!(result.analysis, Some(PortfolioAnalysis::default()));
    }

    #[test]
    fn test_education_goal_funding() {
        let mut s = Scenario::portfolio(6, "Scenario D", 36, 20);
        s.dependents.push(daughter(9, 3_000_000.0));
        s.assets.push(
            AssetAllocation::from_class(AssetClass::SukanyaSamriddhi, "SSY", 300_000.0).with_growth_rate(7.6),
        );
        s.assets.push(AssetAllocation::from_class(AssetClass::EquityFund, "Not earmarked", 5_000_000.0));

        let analysis = PortfolioAnalyzer::default().analyze(&s);
        let edu = analysis.education_goal_funding.unwrap();

        let projected = 300_000.0 * 1.076f64.powi(9);
        assert_eq!(edu.target_year, 9);
        assert_relative_eq!(edu.projected_value, projected, max_relative = 1e-12);
        assert_relative_eq!(
            edu.funding_percentage,
            (projected / 3_000_000.0 * 100.0).min(100.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(edu.funding_percentage, 19.333_498_184_962_856, max_relative = 1e-9);
        assert_relative_eq!(edu.shortfall, 3_000_000.0 - projected, max_relative = 1e-12);
    }

    #[test]
    fn test_education_goal_capped_and_out_of_horizon() {
        let mut s = Scenario::portfolio(7, "Rich", 40, 10);
        s.dependents.push(Dependent {
            relation: "Son".into(),
            current_age: 3,
            years_until_education_goal: None,
            education_cost_estimate: None,
        });
        s.dependents.push(daughter(5, 100_000.0));
        s.assets.push(AssetAllocation::from_class(AssetClass::EducationFund, "Child fund", 1_000_000.0));

        let edu = PortfolioAnalyzer::default().analyze(&s).education_goal_funding.unwrap();
        assert_eq!(edu.relation, "Daughter");
        assert_eq!(edu.funding_percentage, 100.0);
        assert_eq!(edu.shortfall, 0.0);

        s.dependents[1].years_until_education_goal = Some(11);
        assert!(PortfolioAnalyzer::default().analyze(&s).education_goal_funding.is_none());
    }

    #[test]
    fn test_retirement_readiness() {
        let mut s = Scenario::portfolio(8, "Retire", 40, 25);
        s.retirement_age = Some(60);
        s.monthly_expenses = 50_000.0;
        s.assets.push(AssetAllocation::from_class(AssetClass::RetirementFund, "EPF", 2_000_000.0).with_growth_rate(8.0));

        let rr = PortfolioAnalyzer::default().analyze(&s).retirement_readiness.unwrap();
        let corpus = 2_000_000.0 * 1.08f64.powi(20);
        assert_eq!(rr.retirement_year, 20);
        assert_relative_eq!(rr.target_corpus, 15_000_000.0);
        assert_relative_eq!(rr.projected_corpus, corpus, max_relative = 1e-12);
        assert_relative_eq!(rr.funding_percentage, (corpus / 15_000_000.0 * 100.0).min(100.0), max_relative = 1e-12);
        assert_relative_eq!(rr.years_of_expenses_covered, corpus / 600_000.0, max_relative = 1e-12);

        s.retirement_age = Some(70);
        assert!(PortfolioAnalyzer::default().analyze(&s).retirement_readiness.is_none());
    }

    #[test]
    fn test_retirement_without_expenses_guarded() {
        let mut s = Scenario::portfolio(9, "No expenses", 50, 10);
        s.retirement_age = Some(55);
        s.assets.push(AssetAllocation::from_class(AssetClass::Savings, "Bank", 1_000_000.0));

        let analysis = PortfolioAnalyzer::default().analyze(&s);
        let rr = analysis.retirement_readiness.unwrap();
        assert_eq!(rr.funding_percentage, 0.0);
        assert_eq!(rr.years_of_expenses_covered, 0.0);
        assert_eq!(analysis.emergency_fund_months, 0.0);
        assert_relative_eq!(analysis.liquid_assets_value, 1_000_000.0);
    }

    #[test]
    fn test_custom_liquid_threshold() {
        let mut s = Scenario::portfolio(10, "Threshold", 30, 5);
        s.monthly_expenses = 10_000.0;
        s.assets.push(AssetAllocation::from_class(AssetClass::FixedDeposit, "FD", 120_000.0));

        assert_relative_eq!(PortfolioAnalyzer::default().analyze(&s).emergency_fund_months, 12.0);

        let strict = PortfolioAnalyzer::new(AnalysisConfig {
            liquid_threshold: 9,
            ..Default::default()
        });
        assert_eq!(strict.analyze(&s).emergency_fund_months, 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_indicator_invariants(
            holdings in vec((0usize..13, 0u32..10_000_000, 1u8..11, 1u8..11, 0u32..2000), 1..12),
            expenses in 0u32..200_000,
        ) {
            let mut s = Scenario::portfolio(20, "Random", 30, 30);
            s.monthly_expenses = expenses as f64;
            for (i, (class, value, liquidity, risk, growth_bp)) in holdings.into_iter().enumerate() {
                s.assets.push(
                    AssetAllocation::from_class(AssetClass::ALL[class], format!("Asset {}", i), value as f64)
                        .with_growth_rate(growth_bp as f64 / 100.0)
                        .with_scores(liquidity, risk),
                );
            }

            let analysis = PortfolioAnalyzer::default().analyze(&s);
            let total: f64 = analysis.asset_class_distribution.iter().map(|c| c.percentage).sum();

            if analysis.current_total_value > 0.0 {
                prop_assert!((total - 100.0).abs() < 1e-6);

                let risks = s.assets.iter().map(|a| a.risk_score as f64);
                let (lo, hi) = risks.fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)));
                prop_assert!(analysis.weighted_risk_score >= lo - 1e-9 && analysis.weighted_risk_score <= hi + 1e-9);

                let liq = s.assets.iter().map(|a| a.liquidity_score as f64);
                let (lo, hi) = liq.fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)));
                prop_assert!(analysis.weighted_liquidity_score >= lo - 1e-9 && analysis.weighted_liquidity_score <= hi + 1e-9);
            } else {
                prop_assert_eq!(total, 0.0);
            }

            if expenses == 0 {
                prop_assert_eq!(analysis.emergency_fund_months, 0.0);
            }

            let result = PortfolioAnalyzer::default().project(&s);
            for pair in result.points.windows(2) {
                prop_assert!(pair[1].total_amount >= pair[0].total_amount);
            }
        }
    }
}
