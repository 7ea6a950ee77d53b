//! Marketplace dashboard views for Rust.
//!
//! Provides filter/sort/summary view-models for the four marketplace collections
//! (vendor products and orders, lender investments and documents) and the
//! role-based dashboards built from them. Record collections are loaded once from a
//! data directory (or the bundled sample data) and every view owns its own copy.
//!
//! # Quick start
//!
//! ```no_run
//! use marketplace_views::models::RepaymentStatus;
//! use marketplace_views::views::{InvestmentFacet, InvestmentSortField};
//! use marketplace_views::Marketplace;
//!
//! let market = Marketplace::builder().build().unwrap();
//!
//! let mut investments = market.investments();
//! investments.toggle_filter_value(InvestmentFacet::Status(RepaymentStatus::OnTime));
//! investments.set_sort(InvestmentSortField::Amount);
//! println!("{}", investments.summary().total_invested);
//! ```

pub mod collection;
pub mod config;
pub mod dashboard;
pub mod data_source;
pub mod error;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod selection;
pub mod view_model;
pub mod views;

pub use config::Dataset;
pub use dashboard::{AdminDashboard, LenderDashboard, Role, VendorDashboard};
pub use data_source::DataSource;
pub use error::{MarketplaceError, Result};
pub use pipeline::{DerivedView, FilterCriteria, Record, SortDirection, SortSpec};
pub use selection::Dialog;
pub use view_model::CollectionView;

use std::fmt;
use std::path::{Path, PathBuf};

use models::{Document, Investment, Order, Product};
use views::{DocumentsView, InvestmentsView, OrdersView, ProductsView};

// ---------------------------------------------------------------------------
// MarketplaceBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Marketplace`].
///
/// Use [`Marketplace::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MarketplaceBuilder::build) to load the data.
pub struct MarketplaceBuilder {
    data_dir: Option<PathBuf>,
    bundled_fallback: bool,
}

impl Default for MarketplaceBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            bundled_fallback: true,
        }
    }
}

impl MarketplaceBuilder {
    /// Set the directory holding the dataset JSON files.
    ///
    /// If not set, `MARKETPLACE_DATA_DIR` or the platform data directory is used
    /// (see [`config::default_data_dir`]).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable falling back to the bundled sample data for datasets
    /// missing from the data directory. Defaults to `true`.
    pub fn bundled_fallback(mut self, enabled: bool) -> Self {
        self.bundled_fallback = enabled;
        self
    }

    /// Load all four datasets.
    pub fn build(self) -> Result<Marketplace> {
        let source = DataSource::new(self.data_dir, self.bundled_fallback)?;
        Marketplace::load(source)
    }
}

// ---------------------------------------------------------------------------
// Marketplace
// ---------------------------------------------------------------------------

/// The loaded record collections and the entry point for building views.
///
/// Each accessor returns a new, independently owned view over a copy of the data.
pub struct Marketplace {
    source: DataSource,
    products: Vec<Product>,
    orders: Vec<Order>,
    investments: Vec<Investment>,
    documents: Vec<Document>,
}

impl Marketplace {
    /// Create a new builder for configuring the marketplace.
    pub fn builder() -> MarketplaceBuilder {
        MarketplaceBuilder::default()
    }

    /// A marketplace over the bundled sample data only.
    pub fn bundled() -> Result<Self> {
        Self::load(DataSource::bundled())
    }

    /// Load every dataset through `source`.
    pub fn load(source: DataSource) -> Result<Self> {
        Ok(Self {
            products: source.load(Dataset::Products)?,
            orders: source.load(Dataset::Orders)?,
            investments: source.load(Dataset::Investments)?,
            documents: source.load(Dataset::Documents)?,
            source,
        })
    }

    /// Build a marketplace from in-memory collections.
    pub fn from_records(
        products: Vec<Product>,
        orders: Vec<Order>,
        investments: Vec<Investment>,
        documents: Vec<Document>,
    ) -> Self {
        Self {
            source: DataSource::bundled(),
            products,
            orders,
            investments,
            documents,
        }
    }

    // -- View accessors ----------------------------------------------------

    pub fn products(&self) -> ProductsView {
        CollectionView::new(self.products.clone())
    }

    pub fn orders(&self) -> OrdersView {
        CollectionView::new(self.orders.clone())
    }

    pub fn investments(&self) -> InvestmentsView {
        CollectionView::new(self.investments.clone())
    }

    pub fn documents(&self) -> DocumentsView {
        CollectionView::new(self.documents.clone())
    }

    // -- Dashboards --------------------------------------------------------

    pub fn vendor_dashboard(&self) -> VendorDashboard {
        VendorDashboard {
            products: self.products(),
            orders: self.orders(),
        }
    }

    pub fn lender_dashboard(&self) -> LenderDashboard {
        LenderDashboard {
            investments: self.investments(),
            documents: self.documents(),
        }
    }

    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard {
            products: self.products(),
            orders: self.orders(),
            investments: self.investments(),
            documents: self.documents(),
        }
    }

    /// The data source the collections were loaded from.
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Number of records loaded for a dataset.
    pub fn record_count(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::Products => self.products.len(),
            Dataset::Orders => self.orders.len(),
            Dataset::Investments => self.investments.len(),
            Dataset::Documents => self.documents.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<String> = Dataset::ALL
            .iter()
            .map(|d| format!("{}={}", d, self.record_count(*d)))
            .collect();
        write!(
            f,
            "Marketplace(data_dir={}, records=[{}])",
            self.source.data_dir.display(),
            counts.join(", ")
        )
    }
}
