//! Yearly projection output structures

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::assumptions::AssetClass;
use crate::error::PlannerResult;
use crate::portfolio::PortfolioAnalysis;

/// Projected value of one holding in a given year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuePoint {
    pub label: String,
    pub asset_class: AssetClass,
    pub value: f64,
}

/// One yearly sample of a projected trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub age: u32,
    pub total_amount: f64,
    pub total_invested_to_date: f64,
    pub yearly_return_amount: f64,
    /// Total deflated to today's money
    pub inflation_adjusted_value: f64,
    /// Per-asset values (portfolio scenarios only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_values: Vec<AssetValuePoint>,
}

/// Complete projection result for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Scenario identifier
    pub scenario_id: u32,

    /// Yearly points, year 0 through the horizon
    pub points: Vec<ProjectionPoint>,

    /// Tax rate applied to gains in the summary, as a decimal
    pub tax_rate: f64,

    /// Portfolio health indicators (portfolio scenarios only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<PortfolioAnalysis>,
}

impl ProjectionResult {
    pub fn new(scenario_id: u32, tax_rate: f64) -> Self {
        Self {
            scenario_id,
            points: Vec::new(),
            tax_rate,
            analysis: None,
        }
    }

    /// Add a yearly point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let (years, final_amount, total_invested, inflation_adjusted_final) = self
            .final_point()
            .map(|p| (p.year, p.total_amount, p.total_invested_to_date, p.inflation_adjusted_value))
            .unwrap_or((0, 0.0, 0.0, 0.0));

        let total_returns = final_amount - total_invested;

        let wealth_multiplier = if total_invested > 0.0 {
            final_amount / total_invested
        } else {
            0.0
        };

        let cagr = if years > 0 && wealth_multiplier > 0.0 {
            wealth_multiplier.powf(1.0 / years as f64) - 1.0
        } else {
            0.0
        };

        ProjectionSummary {
            years,
            final_amount,
            total_invested,
            total_returns,
            wealth_multiplier,
            cagr,
            inflation_adjusted_final,
            estimated_tax_on_returns: total_returns.max(0.0) * self.tax_rate,
        }
    }

    /// Write the yearly series as CSV.
    /// Portfolio results get one extra column per holding.
    pub fn write_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        let asset_labels: Vec<&str> = self
            .points
            .first()
            .map(|p| p.asset_values.iter().map(|a| a.label.as_str()).collect())
            .unwrap_or_default();

        let mut header = vec![
            "Year",
            "Age",
            "TotalAmount",
            "TotalInvested",
            "YearlyReturn",
            "InflationAdjusted",
        ];
        header.extend(asset_labels.iter().copied());
        csv.write_record(&header)?;

        for point in &self.points {
            let mut record = vec![
                point.year.to_string(),
                point.age.to_string(),
                format!("{:.2}", point.total_amount),
                format!("{:.2}", point.total_invested_to_date),
                format!("{:.2}", point.yearly_return_amount),
                format!("{:.2}", point.inflation_adjusted_value),
            ];
            record.extend(point.asset_values.iter().map(|a| format!("{:.2}", a.value)));
            csv.write_record(&record)?;
        }

        csv.flush()?;
        Ok(())
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_amount: f64,
    pub total_invested: f64,
    /// final_amount - total_invested
    pub total_returns: f64,
    /// final_amount / total_invested, 0 when nothing was invested
    pub wealth_multiplier: f64,
    pub cagr: f64,
    pub inflation_adjusted_final: f64,
    pub estimated_tax_on_returns: f64,
}
