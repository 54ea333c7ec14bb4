//! Portfolio analysis for scenarios built from owned assets

mod analyzer;
mod metrics;

pub use analyzer::{AnalysisConfig, PortfolioAnalyzer};
pub use metrics::{
    asset_class_distribution, emergency_fund, weighted_score, AssetClassShare, EducationFunding,
    PortfolioAnalysis, RetirementReadiness,
};
