//! Domain parameterizations of the collection view.
//!
//! Each module implements [`Record`](crate::pipeline::Record) for one model, defines
//! its facets, sort fields and summary, and adds domain helpers to the matching
//! [`CollectionView`](crate::view_model::CollectionView) instantiation.

pub mod documents;
pub mod investments;
pub mod orders;
pub mod products;

pub use documents::{
    DocumentFacet, DocumentFilterField, DocumentSortField, DocumentSummary, DocumentsView,
};
pub use investments::{
    InvestmentFacet, InvestmentFilterField, InvestmentSortField, InvestmentSummary,
    InvestmentsView,
};
pub use orders::{OrderFacet, OrderFilterField, OrderSortField, OrderSummary, OrdersView};
pub use products::{
    ProductFacet, ProductFilterField, ProductSortField, ProductSummary, ProductsView,
    LOW_STOCK_THRESHOLD,
};
