//! Lender investment portfolio view.

use serde::Serialize;

use crate::models::{Investment, InvestmentCategory, RepaymentStatus, RiskTier};
use crate::pipeline::{Facet, Record, SortKey, SortSpec, Summary};
use crate::view_model::CollectionView;

pub type InvestmentsView = CollectionView<Investment>;

// ---------------------------------------------------------------------------
// Facets and sort fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InvestmentFilterField {
    Status,
    Risk,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InvestmentFacet {
    Status(RepaymentStatus),
    Risk(RiskTier),
    Category(InvestmentCategory),
}

impl Facet for InvestmentFacet {
    type Field = InvestmentFilterField;

    fn field(&self) -> InvestmentFilterField {
        match self {
            InvestmentFacet::Status(_) => InvestmentFilterField::Status,
            InvestmentFacet::Risk(_) => InvestmentFilterField::Risk,
            InvestmentFacet::Category(_) => InvestmentFilterField::Category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestmentSortField {
    Amount,
    Returns,
    InterestRate,
    StartDate,
    MaturityDate,
}

// ---------------------------------------------------------------------------
// InvestmentSummary
// ---------------------------------------------------------------------------

/// Portfolio KPIs over the displayed investments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub investment_count: usize,
    pub total_invested: f64,
    pub total_returns: f64,
    /// On-time and late investments.
    pub active_count: usize,
    /// Interest rate weighted by invested amount.
    pub average_rate: f64,
    /// Total returns as a percentage of total invested.
    pub return_percentage: f64,
}

impl Summary for InvestmentSummary {}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

impl Record for Investment {
    type Id = String;
    type Facet = InvestmentFacet;
    type SortField = InvestmentSortField;
    type Summary = InvestmentSummary;

    const DOMAIN: &'static str = "investments";

    fn id(&self) -> &String {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.vendor_name.as_str(), self.id.as_str()]
    }

    fn facet(&self, field: InvestmentFilterField) -> InvestmentFacet {
        match field {
            InvestmentFilterField::Status => InvestmentFacet::Status(self.status),
            InvestmentFilterField::Risk => InvestmentFacet::Risk(self.risk),
            InvestmentFilterField::Category => InvestmentFacet::Category(self.category),
        }
    }

    fn sort_key(&self, field: InvestmentSortField) -> SortKey {
        match field {
            InvestmentSortField::Amount => self.amount.into(),
            InvestmentSortField::Returns => self.returns.into(),
            InvestmentSortField::InterestRate => self.interest_rate.into(),
            InvestmentSortField::StartDate => self.start_date.into(),
            InvestmentSortField::MaturityDate => self.maturity_date.into(),
        }
    }

    fn default_sort() -> SortSpec<InvestmentSortField> {
        SortSpec::descending(InvestmentSortField::StartDate)
    }

    fn summarize(items: &[Investment]) -> InvestmentSummary {
        let mut summary = InvestmentSummary {
            investment_count: items.len(),
            ..InvestmentSummary::default()
        };
        let mut weighted_rate = 0.0;
        for inv in items {
            summary.total_invested += inv.amount;
            summary.total_returns += inv.returns;
            weighted_rate += inv.interest_rate * inv.amount;
            if inv.status.is_active() {
                summary.active_count += 1;
            }
        }
        if summary.total_invested > 0.0 {
            summary.average_rate = weighted_rate / summary.total_invested;
            summary.return_percentage = summary.total_returns / summary.total_invested * 100.0;
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Portfolio helpers
// ---------------------------------------------------------------------------

impl CollectionView<Investment> {
    /// Record a repayment status change reported for an investment.
    pub fn set_status(&mut self, id: &str, status: RepaymentStatus) -> bool {
        self.update_item(id, |inv| inv.status = status)
    }

    /// Add `amount` to the returns accrued on an investment.
    pub fn record_return(&mut self, id: &str, amount: f64) -> bool {
        self.update_item(id, |inv| inv.returns += amount)
    }

    /// Invested amount per risk tier over the displayed investments.
    pub fn exposure_by_risk(&self) -> Vec<(RiskTier, f64)> {
        RiskTier::ALL
            .iter()
            .map(|tier| {
                let total = self
                    .items()
                    .iter()
                    .filter(|inv| inv.risk == *tier)
                    .map(|inv| inv.amount)
                    .sum();
                (*tier, total)
            })
            .collect()
    }
}
