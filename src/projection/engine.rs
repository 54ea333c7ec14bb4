//! Monthly compounding engine for cash-flow scenarios

use log::{debug, warn};

use super::points::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;
use crate::scenario::Scenario;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Raise the monthly contribution by the inflation rate each year
    pub escalate_contributions: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            escalate_contributions: true,
        }
    }
}

/// Effective monthly rate equivalent to an annual rate
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// Cash-flow projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project a cash-flow scenario year by year, year 0 through `years`
    pub fn project(&self, scenario: &Scenario) -> ProjectionResult {
        let mut result = ProjectionResult::new(scenario.id, scenario.tax_rate());
        let mut state = ProjectionState::from_scenario(scenario);

        let rate = monthly_rate(scenario.annual_return());
        let inflation = scenario.inflation_rate();
        let start_age = scenario.start_age();

        debug!(
            "Projecting scenario {} ({}) over {} years at {:.4}% monthly",
            scenario.id,
            scenario.name,
            scenario.years,
            rate * 100.0
        );
        self.warn_unmatched_events(scenario);

        let mut last_year_growth = 0.0;

        loop {
            let year = state.year;
            let age = start_age + year;

            result.add_point(ProjectionPoint {
                year,
                age,
                total_amount: state.balance,
                total_invested_to_date: state.total_invested,
                yearly_return_amount: last_year_growth,
                inflation_adjusted_value: state.balance / (1.0 + inflation).powi(year as i32),
                asset_values: Vec::new(),
            });

            if year >= scenario.years {
                break;
            }

            for _month in 1..=12 {
                state.advance_month(rate);
            }

            // No escalation after the last simulated year
            let escalation = (self.config.escalate_contributions && year + 1 < scenario.years)
                .then_some(inflation);
            last_year_growth = state.close_year(escalation);

            // Lump sums keyed to this age land at year end and show from the next point
            state.apply_events(age, &scenario.additional_contributions, &scenario.withdrawals);
        }

        result
    }

    fn warn_unmatched_events(&self, scenario: &Scenario) {
        // The final age has no year left to land in
        let ages = scenario.age_range();
        let effective = *ages.start()..*ages.end();
        let unmatched = scenario
            .additional_contributions
            .iter()
            .chain(&scenario.withdrawals)
            .filter(|e| !effective.contains(&e.age_at_event))
            .count();
        if unmatched > 0 {
            warn!(
                "Scenario {}: {} life events fall outside ages {:?} and are ignored",
                scenario.id, unmatched, effective
            );
        }
    }
}
