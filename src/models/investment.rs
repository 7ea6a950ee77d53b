use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{Badge, Tone};

// ---------------------------------------------------------------------------
// RepaymentStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentStatus {
    OnTime,
    Late,
    Defaulted,
    Completed,
}

impl RepaymentStatus {
    pub const ALL: [RepaymentStatus; 4] = [
        RepaymentStatus::OnTime,
        RepaymentStatus::Late,
        RepaymentStatus::Defaulted,
        RepaymentStatus::Completed,
    ];

    /// Whether the investment is still outstanding and being repaid.
    pub fn is_active(self) -> bool {
        matches!(self, RepaymentStatus::OnTime | RepaymentStatus::Late)
    }
}

impl Badge for RepaymentStatus {
    fn label(&self) -> &'static str {
        match self {
            RepaymentStatus::OnTime => "On Time",
            RepaymentStatus::Late => "Late",
            RepaymentStatus::Defaulted => "Defaulted",
            RepaymentStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            RepaymentStatus::OnTime => Tone::Success,
            RepaymentStatus::Late => Tone::Warning,
            RepaymentStatus::Defaulted => Tone::Danger,
            RepaymentStatus::Completed => Tone::Info,
        }
    }
}

// ---------------------------------------------------------------------------
// RiskTier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];
}

impl Badge for RiskTier {
    fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            RiskTier::Low => Tone::Success,
            RiskTier::Medium => Tone::Warning,
            RiskTier::High => Tone::Danger,
        }
    }
}

// ---------------------------------------------------------------------------
// InvestmentCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentCategory {
    InventoryFinancing,
    InvoiceFactoring,
    EquipmentLeasing,
    WorkingCapital,
}

impl InvestmentCategory {
    pub const ALL: [InvestmentCategory; 4] = [
        InvestmentCategory::InventoryFinancing,
        InvestmentCategory::InvoiceFactoring,
        InvestmentCategory::EquipmentLeasing,
        InvestmentCategory::WorkingCapital,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentCategory::InventoryFinancing => "Inventory Financing",
            InvestmentCategory::InvoiceFactoring => "Invoice Factoring",
            InvestmentCategory::EquipmentLeasing => "Equipment Leasing",
            InvestmentCategory::WorkingCapital => "Working Capital",
        }
    }
}

// ---------------------------------------------------------------------------
// Investment — A lender's position in a vendor financing deal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub vendor_name: String,
    pub category: InvestmentCategory,
    pub status: RepaymentStatus,
    pub risk: RiskTier,
    pub amount: f64,
    pub returns: f64,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
    pub start_date: NaiveDate,
    pub maturity_date: NaiveDate,
}
