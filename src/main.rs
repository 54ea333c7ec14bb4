//! Financial Planner CLI
//!
//! Command-line interface for projecting and comparing scenarios

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use financial_planner::scenario::{load_scenarios, presets};
use financial_planner::{
    AnalysisConfig, PortfolioAnalysis, ProjectionConfig, ProjectionResult, Scenario, ScenarioRunner,
};

#[derive(Parser, Debug)]
#[command(name = "planner", version, about = "Project savings plans and analyse portfolios")]
struct Cli {
    /// Liquidity score at which an asset counts towards the emergency fund
    #[arg(long, global = true, default_value_t = 7)]
    liquid_threshold: u8,

    /// Target retirement corpus as a multiple of annual expenses
    #[arg(long, global = true, default_value_t = 25.0)]
    corpus_multiple: f64,

    /// Keep monthly contributions flat instead of raising them with inflation
    #[arg(long, global = true)]
    no_escalation: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project one scenario from a JSON file
    Project {
        file: PathBuf,
        /// Scenario id (defaults to the first in the file)
        #[arg(long)]
        id: Option<u32>,
        /// Write the yearly series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare every scenario in a JSON file
    Compare {
        file: PathBuf,
        /// Write the comparison table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Project on the calling thread only
        #[arg(long)]
        sequential: bool,
    },
    /// Print the built-in preset scenarios as JSON
    Presets,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let runner = ScenarioRunner::with_config(
        ProjectionConfig {
            escalate_contributions: !cli.no_escalation,
        },
        AnalysisConfig {
            liquid_threshold: cli.liquid_threshold,
            retirement_corpus_multiple: cli.corpus_multiple,
            ..Default::default()
        },
    );

    match cli.command {
        Command::Project { file, id, csv, json } => {
            let scenarios = load(&file)?;
            let scenario = match id {
                Some(id) => scenarios
                    .iter()
                    .find(|s| s.id == id)
                    .with_context(|| format!("no scenario with id {} in {}", id, file.display()))?,
                None => match scenarios.first() {
                    Some(first) => first,
                    None => bail!("{} contains no scenarios", file.display()),
                },
            };

            let result = runner.run(scenario);
            if json {
                serde_json::to_writer_pretty(io::stdout().lock(), &result)?;
                println!();
            } else {
                print_projection(scenario, &result);
            }

            if let Some(path) = csv {
                let out = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                result.write_csv(BufWriter::new(out))?;
                println!("\nYearly series written to: {}", path.display());
            }
        }
        Command::Compare { file, csv, sequential } => {
            let scenarios = load(&file)?;
            let runner = if sequential { runner.sequential() } else { runner };
            let comparison = runner.compare(&scenarios);

            println!(
                "{:<30} {:>5} {:<20} {:>16} {:>16} {:>8}",
                "Plan", "Years", "Risk", "Invested", "Final", "Multiple"
            );
            println!("{}", "-".repeat(100));
            for row in &comparison.table {
                println!(
                    "{:<30} {:>5} {:<20} {:>16.2} {:>16.2} {:>7.2}x",
                    row.plan_name, row.years, row.risk_label, row.total_invested, row.final_amount, row.wealth_multiplier
                );
            }

            if let Some(path) = csv {
                let out = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                comparison.write_table_csv(BufWriter::new(out))?;
                println!("\nComparison table written to: {}", path.display());
            }
        }
        Command::Presets => {
            serde_json::to_writer_pretty(io::stdout().lock(), &presets())?;
            println!();
        }
    }

    Ok(())
}

fn load(file: &Path) -> Result<Vec<Scenario>> {
    load_scenarios(file).with_context(|| format!("loading scenarios from {}", file.display()))
}

fn print_projection(scenario: &Scenario, result: &ProjectionResult) {
    println!("Scenario {}: {} ({})", scenario.id, scenario.name, scenario.goal_type.as_str());
    println!();
    println!(
        "{:>4} {:>4} {:>16} {:>16} {:>14} {:>16}",
        "Year", "Age", "Total", "Invested", "Return", "Real value"
    );
    println!("{}", "-".repeat(76));
    for p in &result.points {
        println!(
            "{:>4} {:>4} {:>16.2} {:>16.2} {:>14.2} {:>16.2}",
            p.year, p.age, p.total_amount, p.total_invested_to_date, p.yearly_return_amount, p.inflation_adjusted_value
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Final Amount: {:.2}", summary.final_amount);
    println!("  Total Invested: {:.2}", summary.total_invested);
    println!("  Total Returns: {:.2}", summary.total_returns);
    println!("  Wealth Multiplier: {:.2}x", summary.wealth_multiplier);
    println!("  CAGR: {:.2}%", summary.cagr * 100.0);
    println!("  Inflation-adjusted Final: {:.2}", summary.inflation_adjusted_final);
    println!("  Estimated Tax on Returns: {:.2}", summary.estimated_tax_on_returns);

    if let Some(analysis) = &result.analysis {
        print_analysis(analysis);
    }
}

fn print_analysis(analysis: &PortfolioAnalysis) {
    println!("\nPortfolio Health:");
    println!("  Current Value: {:.2}", analysis.current_total_value);
    for share in &analysis.asset_class_distribution {
        println!("    {:<20} {:>16.2} {:>6.1}%", share.asset_class.as_str(), share.value, share.percentage);
    }
    println!("  Weighted Risk Score: {:.2}", analysis.weighted_risk_score);
    println!("  Weighted Liquidity Score: {:.2}", analysis.weighted_liquidity_score);
    println!("  Emergency Fund: {:.1} months", analysis.emergency_fund_months);

    if let Some(edu) = &analysis.education_goal_funding {
        println!(
            "  Education ({} in year {}): {:.1}% funded, shortfall {:.2}",
            edu.relation, edu.target_year, edu.funding_percentage, edu.shortfall
        );
    }
    if let Some(rr) = &analysis.retirement_readiness {
        println!(
            "  Retirement (year {}): {:.1}% funded, shortfall {:.2}, covers {:.1} years of expenses",
            rr.retirement_year, rr.funding_percentage, rr.shortfall, rr.years_of_expenses_covered
        );
    }
}
