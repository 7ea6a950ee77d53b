//! Role-based dashboards composed from the collection views.
//!
//! Every dashboard owns its own view instances; filtering on one dashboard never
//! affects another. KPI figures are read from each view's summary, so they always
//! reflect the currently filtered records.

use serde::Serialize;

use crate::views::{DocumentsView, InvestmentsView, OrdersView, ProductsView};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Vendor,
    Lender,
    Admin,
}

/// The collection screens a dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Products,
    Orders,
    Investments,
    Documents,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Vendor => "Vendor",
            Role::Lender => "Lender",
            Role::Admin => "Administrator",
        }
    }

    /// Screens available to this role, in navigation order.
    pub fn views(&self) -> &'static [ViewKind] {
        match self {
            Role::Vendor => &[ViewKind::Products, ViewKind::Orders],
            Role::Lender => &[ViewKind::Investments, ViewKind::Documents],
            Role::Admin => &[
                ViewKind::Products,
                ViewKind::Orders,
                ViewKind::Investments,
                ViewKind::Documents,
            ],
        }
    }

    pub fn can_view(&self, kind: ViewKind) -> bool {
        self.views().contains(&kind)
    }
}

// ---------------------------------------------------------------------------
// Dashboards
// ---------------------------------------------------------------------------

pub struct VendorDashboard {
    pub products: ProductsView,
    pub orders: OrdersView,
}

pub struct LenderDashboard {
    pub investments: InvestmentsView,
    pub documents: DocumentsView,
}

impl LenderDashboard {
    /// Headline portfolio figures over the filtered investments and documents.
    pub fn kpis(&self) -> LenderKpis {
        let inv = self.investments.summary();
        LenderKpis {
            total_invested: inv.total_invested,
            total_returns: inv.total_returns,
            active_investments: inv.active_count,
            average_rate: inv.average_rate,
            pending_signatures: self.documents.summary().pending_signature_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LenderKpis {
    pub total_invested: f64,
    pub total_returns: f64,
    pub active_investments: usize,
    pub average_rate: f64,
    pub pending_signatures: usize,
}

pub struct AdminDashboard {
    pub products: ProductsView,
    pub orders: OrdersView,
    pub investments: InvestmentsView,
    pub documents: DocumentsView,
}

impl AdminDashboard {
    /// Platform-wide figures over each view's filtered records.
    pub fn overview(&self) -> PlatformOverview {
        PlatformOverview {
            product_count: self.products.summary().total_products,
            order_count: self.orders.summary().total_orders,
            order_revenue: self.orders.summary().total_revenue,
            total_invested: self.investments.summary().total_invested,
            pending_documents: self.documents.summary().pending_signature_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOverview {
    pub product_count: usize,
    pub order_count: usize,
    pub order_revenue: f64,
    pub total_invested: f64,
    pub pending_documents: usize,
}
