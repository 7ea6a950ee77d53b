use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{Badge, Tone};

// ---------------------------------------------------------------------------
// ProductStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    Active,
    OutOfStock,
    Draft,
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 4] = [
        ProductStatus::Active,
        ProductStatus::OutOfStock,
        ProductStatus::Draft,
        ProductStatus::Archived,
    ];
}

impl Badge for ProductStatus {
    fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::OutOfStock => "Out of Stock",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            ProductStatus::Active => Tone::Success,
            ProductStatus::OutOfStock => Tone::Danger,
            ProductStatus::Draft => Tone::Neutral,
            ProductStatus::Archived => Tone::Warning,
        }
    }
}

// ---------------------------------------------------------------------------
// ProductCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Electronics,
    Apparel,
    HomeGoods,
    Food,
    Beauty,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Electronics,
        ProductCategory::Apparel,
        ProductCategory::HomeGoods,
        ProductCategory::Food,
        ProductCategory::Beauty,
        ProductCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Apparel => "Apparel",
            ProductCategory::HomeGoods => "Home Goods",
            ProductCategory::Food => "Food & Beverage",
            ProductCategory::Beauty => "Beauty",
            ProductCategory::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Product — A vendor's catalogue entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub status: ProductStatus,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub sales: u32,
    pub created_at: NaiveDate,
    pub description: Option<String>,
}
