//! Scenario runner and side-by-side comparison
//!
//! Each scenario is projected independently; the runner only chooses the
//! engine and keeps results in input order.

use std::io::Write;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PlannerResult;
use crate::portfolio::{AnalysisConfig, PortfolioAnalyzer};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};
use crate::scenario::{Scenario, ScenarioKind};

/// Runs scenarios through the engine their goal type calls for
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&scenario);
/// let comparison = runner.compare(&scenarios);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
    analyzer: PortfolioAnalyzer,
    /// Project comparison entries on the rayon pool
    parallel: bool,
}

impl ScenarioRunner {
    /// Create runner with default configuration
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default(), AnalysisConfig::default())
    }

    pub fn with_config(projection: ProjectionConfig, analysis: AnalysisConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(projection),
            analyzer: PortfolioAnalyzer::new(analysis),
            parallel: true,
        }
    }

    /// Run comparisons sequentially on the calling thread
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Project a single scenario
    pub fn run(&self, scenario: &Scenario) -> ProjectionResult {
        match scenario.kind() {
            ScenarioKind::CashFlow => self.engine.project(scenario),
            ScenarioKind::Portfolio => self.analyzer.project(scenario),
        }
    }

    /// Project several scenarios, preserving order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ProjectionResult> {
        if self.parallel {
            scenarios.par_iter().map(|s| self.run(s)).collect()
        } else {
            scenarios.iter().map(|s| self.run(s)).collect()
        }
    }

    /// Project scenarios and assemble the comparison table
    pub fn compare(&self, scenarios: &[Scenario]) -> Comparison {
        info!("Comparing {} scenarios", scenarios.len());

        let runs: Vec<ScenarioRun> = scenarios
            .iter()
            .cloned()
            .zip(self.run_batch(scenarios))
            .map(|(scenario, result)| {
                let summary = result.summary();
                ScenarioRun {
                    scenario,
                    result,
                    summary,
                }
            })
            .collect();

        let table = runs.iter().map(ComparisonRow::from_run).collect();
        Comparison { runs, table }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// One scenario with its series and summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRun {
    pub scenario: Scenario,
    pub result: ProjectionResult,
    pub summary: ProjectionSummary,
}

/// Flattened row for tabular display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "Plan")]
    pub plan_name: String,
    #[serde(rename = "Years")]
    pub years: u32,
    #[serde(rename = "Risk")]
    pub risk_label: String,
    #[serde(rename = "TotalInvested")]
    pub total_invested: f64,
    #[serde(rename = "FinalAmount")]
    pub final_amount: f64,
    #[serde(rename = "WealthMultiplier")]
    pub wealth_multiplier: f64,
}

impl ComparisonRow {
    fn from_run(run: &ScenarioRun) -> Self {
        Self {
            plan_name: run.scenario.name.clone(),
            years: run.scenario.years,
            risk_label: run.scenario.risk_label().to_string(),
            total_invested: run.summary.total_invested,
            final_amount: run.summary.final_amount,
            wealth_multiplier: run.summary.wealth_multiplier,
        }
    }
}

/// Parallel series plus the summary table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub runs: Vec<ScenarioRun>,
    pub table: Vec<ComparisonRow>,
}

impl Comparison {
    /// Write the summary table as CSV
    pub fn write_table_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in &self.table {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}
