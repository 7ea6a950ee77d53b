//! Vendor product catalogue view.

use serde::Serialize;

use crate::models::{Product, ProductCategory, ProductStatus};
use crate::pipeline::{Facet, Record, SortKey, SortSpec, Summary};
use crate::view_model::CollectionView;

/// Stock level below which an in-stock product counts as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

pub type ProductsView = CollectionView<Product>;

// ---------------------------------------------------------------------------
// Facets and sort fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductFilterField {
    Status,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductFacet {
    Status(ProductStatus),
    Category(ProductCategory),
}

impl Facet for ProductFacet {
    type Field = ProductFilterField;

    fn field(&self) -> ProductFilterField {
        match self {
            ProductFacet::Status(_) => ProductFilterField::Status,
            ProductFacet::Category(_) => ProductFilterField::Category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSortField {
    Name,
    Price,
    Stock,
    Sales,
    CreatedAt,
}

// ---------------------------------------------------------------------------
// ProductSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub total_products: usize,
    pub active_count: usize,
    pub out_of_stock_count: usize,
    pub low_stock_count: usize,
    pub total_stock: u64,
    pub inventory_value: f64,
}

impl Summary for ProductSummary {}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

impl Record for Product {
    type Id = String;
    type Facet = ProductFacet;
    type SortField = ProductSortField;
    type Summary = ProductSummary;

    const DOMAIN: &'static str = "products";

    fn id(&self) -> &String {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }

    fn facet(&self, field: ProductFilterField) -> ProductFacet {
        match field {
            ProductFilterField::Status => ProductFacet::Status(self.status),
            ProductFilterField::Category => ProductFacet::Category(self.category),
        }
    }

    fn sort_key(&self, field: ProductSortField) -> SortKey {
        match field {
            ProductSortField::Name => SortKey::text(&self.name),
            ProductSortField::Price => self.price.into(),
            ProductSortField::Stock => self.stock.into(),
            ProductSortField::Sales => self.sales.into(),
            ProductSortField::CreatedAt => self.created_at.into(),
        }
    }

    fn default_sort() -> SortSpec<ProductSortField> {
        SortSpec::descending(ProductSortField::CreatedAt)
    }

    fn summarize(items: &[Product]) -> ProductSummary {
        items.iter().fold(ProductSummary::default(), |mut acc, p| {
            acc.total_products += 1;
            match p.status {
                ProductStatus::Active => acc.active_count += 1,
                ProductStatus::OutOfStock => acc.out_of_stock_count += 1,
                ProductStatus::Draft | ProductStatus::Archived => {}
            }
            if is_low_stock(p) {
                acc.low_stock_count += 1;
            }
            acc.total_stock += u64::from(p.stock);
            acc.inventory_value += p.price * f64::from(p.stock);
            acc
        })
    }
}

/// In stock but below [`LOW_STOCK_THRESHOLD`].
pub fn is_low_stock(product: &Product) -> bool {
    product.stock > 0 && product.stock < LOW_STOCK_THRESHOLD
}

// ---------------------------------------------------------------------------
// Product management helpers
// ---------------------------------------------------------------------------

impl CollectionView<Product> {
    /// Set the stock level, moving the product between active and out-of-stock
    /// as needed. Drafts and archived products keep their status.
    pub fn restock(&mut self, id: &str, stock: u32) -> bool {
        self.update_item(id, |p| {
            p.stock = stock;
            p.status = match (p.status, stock) {
                (ProductStatus::Active, 0) => ProductStatus::OutOfStock,
                (ProductStatus::OutOfStock, n) if n > 0 => ProductStatus::Active,
                (status, _) => status,
            };
        })
    }

    pub fn set_status(&mut self, id: &str, status: ProductStatus) -> bool {
        self.update_item(id, |p| p.status = status)
    }

    pub fn set_price(&mut self, id: &str, price: f64) -> bool {
        self.update_item(id, |p| p.price = price)
    }

    /// Displayed products that are running low, in display order.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.items().iter().filter(|p| is_low_stock(p)).collect()
    }
}
