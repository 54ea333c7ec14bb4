//! Asset classes and their default growth, liquidity and risk scores

use serde::{Deserialize, Serialize};

/// Category of an owned holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetClass {
    /// Bank savings account
    Savings,
    FixedDeposit,
    DebtFund,
    EquityFund,
    /// Listed shares held directly
    DirectEquity,
    /// Employer provident fund
    RetirementFund,
    /// Public Provident Fund
    Ppf,
    /// National Pension System
    Nps,
    /// Girl-child education savings scheme
    SukanyaSamriddhi,
    /// Any fund set aside for a child's education
    EducationFund,
    RealEstate,
    Gold,
    Other,
}

/// Default parameters applied when an asset of a class is added
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetClassDefaults {
    /// Annual growth rate, percent
    pub annual_growth_rate_pct: f64,
    /// 1-10, 10 = cash-like
    pub liquidity_score: u8,
    /// 1-10, 10 = most volatile
    pub risk_score: u8,
}

fn table_entry(growth: f64, liquidity: u8, risk: u8) -> AssetClassDefaults {
    AssetClassDefaults {
        annual_growth_rate_pct: growth,
        liquidity_score: liquidity,
        risk_score: risk,
    }
}

impl AssetClass {
    /// Every class, in display order
    pub const ALL: [AssetClass; 13] = [
        AssetClass::Savings,
        AssetClass::FixedDeposit,
        AssetClass::DebtFund,
        AssetClass::EquityFund,
        AssetClass::DirectEquity,
        AssetClass::RetirementFund,
        AssetClass::Ppf,
        AssetClass::Nps,
        AssetClass::SukanyaSamriddhi,
        AssetClass::EducationFund,
        AssetClass::RealEstate,
        AssetClass::Gold,
        AssetClass::Other,
    ];

    /// Static default table
    pub fn defaults(&self) -> AssetClassDefaults {
        match self {
            AssetClass::Savings => table_entry(3.5, 10, 1),
            AssetClass::FixedDeposit => table_entry(6.5, 7, 2),
            AssetClass::DebtFund => table_entry(7.0, 8, 3),
            AssetClass::EquityFund => table_entry(12.0, 8, 7),
            AssetClass::DirectEquity => table_entry(13.0, 9, 8),
            AssetClass::RetirementFund => table_entry(8.25, 2, 1),
            AssetClass::Ppf => table_entry(7.1, 3, 1),
            AssetClass::Nps => table_entry(10.0, 1, 5),
            AssetClass::SukanyaSamriddhi => table_entry(8.2, 2, 1),
            AssetClass::EducationFund => table_entry(10.0, 4, 5),
            AssetClass::RealEstate => table_entry(7.0, 2, 4),
            AssetClass::Gold => table_entry(8.0, 7, 4),
            AssetClass::Other => table_entry(6.0, 5, 5),
        }
    }

    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Savings => "Savings",
            AssetClass::FixedDeposit => "Fixed Deposit",
            AssetClass::DebtFund => "Debt Fund",
            AssetClass::EquityFund => "Equity Fund",
            AssetClass::DirectEquity => "Direct Equity",
            AssetClass::RetirementFund => "Retirement Fund",
            AssetClass::Ppf => "PPF",
            AssetClass::Nps => "NPS",
            AssetClass::SukanyaSamriddhi => "Sukanya Samriddhi",
            AssetClass::EducationFund => "Education Fund",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Gold => "Gold",
            AssetClass::Other => "Other",
        }
    }

    /// Classes earmarked for a child's education by default
    pub fn default_education_classes() -> Vec<AssetClass> {
        vec![AssetClass::SukanyaSamriddhi, AssetClass::EducationFund]
    }
}
