//! Running state of a cash-flow projection

use crate::scenario::{LifeEvent, Scenario};

/// State of a plan at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Completed projection years (0 = start)
    pub year: u32,

    /// Current corpus
    pub balance: f64,

    /// Everything paid in so far, including lump-sum additions
    pub total_invested: f64,

    /// Contribution paid each month of the current year
    pub monthly_contribution: f64,

    /// Growth credited since the start of the current year
    pub ytd_growth: f64,
}

impl ProjectionState {
    /// Initialize state from a scenario at projection start
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            year: 0,
            balance: scenario.initial_investment,
            total_invested: scenario.initial_investment,
            monthly_contribution: scenario.monthly_investment,
            ytd_growth: 0.0,
        }
    }

    /// Pay this month's contribution, then credit a month of growth
    pub fn advance_month(&mut self, monthly_rate: f64) {
        self.balance += self.monthly_contribution;
        self.total_invested += self.monthly_contribution;

        let growth = self.balance * monthly_rate;
        self.balance += growth;
        self.ytd_growth += growth;
    }

    /// Close the year and return the growth it earned.
    /// `escalation` raises next year's contribution by that fraction.
    pub fn close_year(&mut self, escalation: Option<f64>) -> f64 {
        let earned = self.ytd_growth;

        if let Some(rate) = escalation {
            self.monthly_contribution *= 1.0 + rate;
        }

        self.year += 1;
        self.ytd_growth = 0.0;
        earned
    }

    /// Apply lump sums keyed to `age`.
    /// Additions count as invested money; withdrawals only reduce the corpus.
    pub fn apply_events(&mut self, age: u32, additions: &[LifeEvent], withdrawals: &[LifeEvent]) {
        for event in additions.iter().filter(|e| e.age_at_event == age) {
            self.balance += event.amount;
            self.total_invested += event.amount;
        }
        for event in withdrawals.iter().filter(|e| e.age_at_event == age) {
            self.balance = (self.balance - event.amount).max(0.0);
        }
    }
}
