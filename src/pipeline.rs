//! Pure filter/sort/summarize engine shared by every collection view.
//!
//! A [`Record`] describes how one domain entity is searched, faceted, sorted and
//! summarized. [`derive_view`] combines a base collection with a [`FilterCriteria`]
//! and a [`SortSpec`] into a [`DerivedView`] without touching any of its inputs.
//!
//! # Example
//!
//! ```rust
//! use marketplace_views::models::{Product, ProductStatus};
//! use marketplace_views::pipeline::{derive_view, FilterCriteria, Record};
//! use marketplace_views::views::ProductFacet;
//!
//! let products: Vec<Product> = Vec::new();
//! let mut criteria = FilterCriteria::new();
//! criteria.toggle(ProductFacet::Status(ProductStatus::Active));
//! let view = derive_view(&products, &criteria, Product::default_sort());
//! assert!(view.is_empty());
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A selectable value of a classificatory field.
///
/// Each variant names both the field it belongs to and the value, so a facet can be
/// toggled without passing the field separately.
pub trait Facet: Copy + Ord + Debug {
    /// The closed set of classificatory fields this facet ranges over.
    type Field: Copy + Ord + Debug;

    /// The field this value belongs to.
    fn field(&self) -> Self::Field;
}

/// Summary aggregate computed over a derived view.
pub trait Summary: Default + Clone + Debug + PartialEq + Serialize {
    /// Named numeric totals, keyed by their serialized field name.
    ///
    /// Non-numeric fields are skipped.
    fn metrics(&self) -> BTreeMap<String, f64> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .filter_map(|(name, value)| value.as_f64().map(|n| (name, n)))
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}

/// A domain entity that can be displayed through a collection view.
pub trait Record: Clone + Debug + PartialEq {
    type Id: Clone + PartialEq + Debug;
    type Facet: Facet;
    type SortField: Copy + Eq + Debug;
    type Summary: Summary;

    /// Short domain name used in log events.
    const DOMAIN: &'static str;

    /// Stable unique identifier.
    fn id(&self) -> &Self::Id;

    /// Text fields the free-text query is matched against.
    fn search_text(&self) -> Vec<&str>;

    /// This record's value for a classificatory field.
    fn facet(&self, field: <Self::Facet as Facet>::Field) -> Self::Facet;

    /// Key used to order records by `field`.
    fn sort_key(&self, field: Self::SortField) -> SortKey;

    /// Sort applied to a freshly constructed view.
    fn default_sort() -> SortSpec<Self::SortField>;

    /// Aggregate the given (already filtered) records.
    fn summarize(items: &[Self]) -> Self::Summary;
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Value extracted from a record for ordering.
///
/// Keys of the same kind compare by their natural order. `Missing` sorts below
/// every present value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl SortKey {
    /// Case-insensitive text key.
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    /// Total order over keys.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        SortKey::Number(value)
    }
}

impl From<u32> for SortKey {
    fn from(value: u32) -> Self {
        SortKey::Number(f64::from(value))
    }
}

impl From<u64> for SortKey {
    fn from(value: u64) -> Self {
        // File sizes and counts stay far below 2^53.
        SortKey::Number(value as f64)
    }
}

impl From<NaiveDate> for SortKey {
    fn from(value: NaiveDate) -> Self {
        SortKey::Date(value)
    }
}

impl<T: Into<SortKey>> From<Option<T>> for SortKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(SortKey::Missing, Into::into)
    }
}

// ---------------------------------------------------------------------------
// SortSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The current sort field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// The spec that results from selecting `field`.
    ///
    /// Selecting the current field flips the direction; any other field becomes the
    /// new key in descending order.
    pub fn toggled(self, field: F) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::descending(field)
        }
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// Free-text query plus per-field selected facet values.
///
/// An empty selection for a field places no restriction on it; a non-empty selection
/// is an inclusion list. All active predicates are combined with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<F: Facet> {
    query: String,
    selections: BTreeMap<F::Field, BTreeSet<F>>,
}

impl<F: Facet> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self {
            query: String::new(),
            selections: BTreeMap::new(),
        }
    }
}

impl<F: Facet> FilterCriteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the free-text query. An empty string clears it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Add `value` to its field's selection, or remove it if already selected.
    pub fn toggle(&mut self, value: F) {
        let field = value.field();
        let set = self.selections.entry(field).or_default();
        if !set.remove(&value) {
            set.insert(value);
        }
        if set.is_empty() {
            self.selections.remove(&field);
        }
    }

    pub fn is_selected(&self, value: F) -> bool {
        self.selections
            .get(&value.field())
            .is_some_and(|set| set.contains(&value))
    }

    /// Selected values for `field`, in facet order.
    pub fn selected(&self, field: F::Field) -> Vec<F> {
        self.selections
            .get(&field)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of selected facet values across all fields.
    pub fn active_count(&self) -> usize {
        self.selections.values().map(BTreeSet::len).sum()
    }

    /// Reset the query and every selection.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selections.clear();
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.selections.is_empty()
    }

    /// Whether `record` passes every active predicate.
    pub fn matches<R: Record<Facet = F>>(&self, record: &R) -> bool {
        self.matches_query(record)
            && self
                .selections
                .iter()
                .all(|(field, set)| set.contains(&record.facet(*field)))
    }

    fn matches_query<R: Record<Facet = F>>(&self, record: &R) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

// ---------------------------------------------------------------------------
// DerivedView
// ---------------------------------------------------------------------------

/// The filtered, sorted records together with their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<R: Record> {
    pub items: Vec<R>,
    pub summary: R::Summary,
}

impl<R: Record> Default for DerivedView<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            summary: R::Summary::default(),
        }
    }
}

impl<R: Record> DerivedView<R> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifiers of the displayed records, in display order.
    pub fn ids(&self) -> Vec<R::Id> {
        self.items.iter().map(|r| r.id().clone()).collect()
    }
}

/// Filter, sort and summarize `base` without modifying it.
pub fn derive_view<R: Record>(
    base: &[R],
    criteria: &FilterCriteria<R::Facet>,
    sort: SortSpec<R::SortField>,
) -> DerivedView<R> {
    let mut items: Vec<R> = base
        .iter()
        .filter(|record| criteria.matches(*record))
        .cloned()
        .collect();
    sort_records(&mut items, sort);
    let summary = R::summarize(&items);
    DerivedView { items, summary }
}

/// Stable sort by `sort`; records with equal keys keep their relative order.
pub fn sort_records<R: Record>(items: &mut Vec<R>, sort: SortSpec<R::SortField>) {
    let mut keyed: Vec<(SortKey, R)> = items
        .drain(..)
        .map(|record| (record.sort_key(sort.field), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| sort.direction.apply(a.compare(b)));
    items.extend(keyed.into_iter().map(|(_, record)| record));
}
