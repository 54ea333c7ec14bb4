//! Scenario data structures matching the planner's JSON format

use serde::{Deserialize, Serialize};

use crate::assumptions::{resolve_annual_return, AssetClass, RiskProfile};

/// What the plan is saving towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalType {
    Retirement,
    Education,
    HomePurchase,
    WealthBuilding,
    Custom,
    /// Review of existing holdings rather than a contribution plan
    PortfolioAnalysis,
}

/// Which engine a scenario is projected with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Monthly contributions compounded monthly
    CashFlow,
    /// Owned assets compounded annually, each at its own rate
    Portfolio,
}

impl GoalType {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            GoalType::Retirement
            | GoalType::Education
            | GoalType::HomePurchase
            | GoalType::WealthBuilding
            | GoalType::Custom => ScenarioKind::CashFlow,
            GoalType::PortfolioAnalysis => ScenarioKind::Portfolio,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Retirement => "Retirement",
            GoalType::Education => "Education",
            GoalType::HomePurchase => "Home Purchase",
            GoalType::WealthBuilding => "Wealth Building",
            GoalType::Custom => "Custom",
            GoalType::PortfolioAnalysis => "Portfolio Analysis",
        }
    }
}

/// A lump sum added or withdrawn at a given age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeEvent {
    pub age_at_event: u32,
    pub amount: f64,
}

impl LifeEvent {
    pub fn new(age_at_event: u32, amount: f64) -> Self {
        Self { age_at_event, amount }
    }
}

/// One owned holding inside a portfolio scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset_class: AssetClass,
    pub label: String,
    pub current_value: f64,
    pub annual_growth_rate_pct: f64,
    /// 1-10, 10 = most liquid
    pub liquidity_score: u8,
    /// 1-10, 10 = highest risk
    pub risk_score: u8,
}

impl AssetAllocation {
    /// Build an asset from the class default table
    pub fn from_class(asset_class: AssetClass, label: impl Into<String>, current_value: f64) -> Self {
        let d = asset_class.defaults();
        Self {
            asset_class,
            label: label.into(),
            current_value,
            annual_growth_rate_pct: d.annual_growth_rate_pct,
            liquidity_score: d.liquidity_score,
            risk_score: d.risk_score,
        }
    }

    /// Override the class growth rate for this holding
    pub fn with_growth_rate(mut self, annual_growth_rate_pct: f64) -> Self {
        self.annual_growth_rate_pct = annual_growth_rate_pct;
        self
    }

    pub fn with_scores(mut self, liquidity_score: u8, risk_score: u8) -> Self {
        self.liquidity_score = liquidity_score;
        self.risk_score = risk_score;
        self
    }

    /// Value after `years` of annual compounding
    pub fn projected_value(&self, years: u32) -> f64 {
        self.current_value * (1.0 + self.annual_growth_rate_pct / 100.0).powi(years as i32)
    }
}

/// A person whose future needs the plan must fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    pub relation: String,
    pub current_age: u32,
    #[serde(default)]
    pub years_until_education_goal: Option<u32>,
    #[serde(default)]
    pub education_cost_estimate: Option<f64>,
}

impl Dependent {
    /// Years to goal and cost, if this dependent has an education goal
    pub fn education_goal(&self) -> Option<(u32, f64)> {
        match (self.years_until_education_goal, self.education_cost_estimate) {
            (Some(years), Some(cost)) if cost > 0.0 => Some((years, cost)),
            _ => None,
        }
    }
}

/// A complete, user-editable description of one financial plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique scenario identifier
    pub id: u32,

    pub name: String,

    pub goal_type: GoalType,

    /// Lump sum invested at the start
    #[serde(default)]
    pub initial_investment: f64,

    /// Monthly SIP amount in year 1
    #[serde(default)]
    pub monthly_investment: f64,

    /// Projection horizon in years
    pub years: u32,

    #[serde(default)]
    pub risk_profile: RiskProfile,

    /// Overrides the profile-derived return when present
    #[serde(default)]
    pub expected_annual_return_pct: Option<f64>,

    #[serde(default)]
    pub inflation_rate_pct: f64,

    #[serde(default)]
    pub tax_rate_pct: f64,

    #[serde(default)]
    pub additional_contributions: Vec<LifeEvent>,

    #[serde(default)]
    pub withdrawals: Vec<LifeEvent>,

    // Portfolio fields
    #[serde(default)]
    pub current_age: Option<u32>,

    #[serde(default)]
    pub retirement_age: Option<u32>,

    #[serde(default)]
    pub monthly_expenses: f64,

    #[serde(default)]
    pub monthly_income: f64,

    #[serde(default)]
    pub monthly_savings: f64,

    #[serde(default)]
    pub assets: Vec<AssetAllocation>,

    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Scenario {
    /// Create a cash-flow scenario with default rates and no portfolio fields
    pub fn new(id: u32, name: impl Into<String>, goal_type: GoalType, years: u32) -> Self {
        Self {
            id,
            name: name.into(),
            goal_type,
            initial_investment: 0.0,
            monthly_investment: 0.0,
            years,
            risk_profile: RiskProfile::default(),
            expected_annual_return_pct: None,
            inflation_rate_pct: 0.0,
            tax_rate_pct: 0.0,
            additional_contributions: Vec::new(),
            withdrawals: Vec::new(),
            current_age: None,
            retirement_age: None,
            monthly_expenses: 0.0,
            monthly_income: 0.0,
            monthly_savings: 0.0,
            assets: Vec::new(),
            dependents: Vec::new(),
        }
    }

    /// Create an empty portfolio-analysis scenario
    pub fn portfolio(id: u32, name: impl Into<String>, current_age: u32, years: u32) -> Self {
        Self {
            current_age: Some(current_age),
            ..Self::new(id, name, GoalType::PortfolioAnalysis, years)
        }
    }

    pub fn kind(&self) -> ScenarioKind {
        self.goal_type.kind()
    }

    /// Annual return as a decimal, explicit override first
    pub fn annual_return(&self) -> f64 {
        resolve_annual_return(self.risk_profile, self.expected_annual_return_pct)
    }

    pub fn inflation_rate(&self) -> f64 {
        self.inflation_rate_pct / 100.0
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate_pct / 100.0
    }

    /// Starting age, zero when not supplied
    pub fn start_age(&self) -> u32 {
        self.current_age.unwrap_or(0)
    }

    /// Sum of current asset values
    pub fn portfolio_value(&self) -> f64 {
        self.assets.iter().map(|a| a.current_value).sum()
    }

    /// Age range covered by the projection, inclusive
    pub fn age_range(&self) -> std::ops::RangeInclusive<u32> {
        let start = self.start_age();
        start..=start.saturating_add(self.years)
    }

    /// Label for the risk column of comparison tables
    pub fn risk_label(&self) -> &'static str {
        match self.kind() {
            ScenarioKind::CashFlow => self.risk_profile.as_str(),
            ScenarioKind::Portfolio => "Portfolio Analysis",
        }
    }
}
