//! Stateful collection view-model.
//!
//! [`CollectionView`] owns a base collection, the current [`FilterCriteria`] and
//! [`SortSpec`], the derived view they produce, and the selection/dialog state used
//! by detail and edit flows. Every state-setting call recomputes the derived view
//! exactly once; [`CollectionView::batch`] groups several setters behind a single
//! recomputation.
//!
//! ```rust
//! use marketplace_views::models::{Product, ProductStatus};
//! use marketplace_views::views::{ProductFacet, ProductSortField};
//! use marketplace_views::CollectionView;
//!
//! let mut view: CollectionView<Product> = CollectionView::new(Vec::new());
//! view.batch(|edit| {
//!     edit.set_search_query("lamp");
//!     edit.toggle_filter_value(ProductFacet::Status(ProductStatus::Active));
//!     edit.set_sort(ProductSortField::Price);
//! });
//! assert_eq!(view.recompute_count(), 2);
//! ```

use std::borrow::Borrow;
use std::fmt::Debug;

use crate::collection;
use crate::pipeline::{derive_view, DerivedView, Facet, FilterCriteria, Record, SortSpec};
use crate::selection::{Dialog, SelectionState};

// ---------------------------------------------------------------------------
// ViewEdit
// ---------------------------------------------------------------------------

/// Mutable access to the filter and sort state inside [`CollectionView::batch`].
pub struct ViewEdit<'a, R: Record> {
    criteria: &'a mut FilterCriteria<R::Facet>,
    sort: &'a mut SortSpec<R::SortField>,
}

impl<R: Record> ViewEdit<'_, R> {
    pub fn set_search_query(&mut self, text: impl Into<String>) -> &mut Self {
        self.criteria.set_query(text);
        self
    }

    pub fn toggle_filter_value(&mut self, value: R::Facet) -> &mut Self {
        self.criteria.toggle(value);
        self
    }

    pub fn set_sort(&mut self, field: R::SortField) -> &mut Self {
        *self.sort = self.sort.toggled(field);
        self
    }

    pub fn clear_all_filters(&mut self) -> &mut Self {
        self.criteria.clear();
        self
    }
}

// ---------------------------------------------------------------------------
// CollectionView
// ---------------------------------------------------------------------------

/// Filter/sort/summary view-model over one domain collection.
#[derive(Debug, Clone)]
pub struct CollectionView<R: Record> {
    base: Vec<R>,
    criteria: FilterCriteria<R::Facet>,
    sort: SortSpec<R::SortField>,
    derived: DerivedView<R>,
    selection: SelectionState<R::Id>,
    recomputations: u64,
}

impl<R: Record> CollectionView<R> {
    /// Create a view over `base` using the record's default sort.
    pub fn new(base: Vec<R>) -> Self {
        Self::with_sort(base, R::default_sort())
    }

    /// Create a view over `base` with an explicit initial sort.
    pub fn with_sort(base: Vec<R>, sort: SortSpec<R::SortField>) -> Self {
        let mut view = Self {
            base,
            criteria: FilterCriteria::new(),
            sort,
            derived: DerivedView::default(),
            selection: SelectionState::default(),
            recomputations: 0,
        };
        view.recompute();
        view
    }

    // -- Read access -------------------------------------------------------

    /// The current base collection.
    pub fn base(&self) -> &[R] {
        &self.base
    }

    pub fn criteria(&self) -> &FilterCriteria<R::Facet> {
        &self.criteria
    }

    pub fn search_query(&self) -> &str {
        self.criteria.query()
    }

    pub fn sort(&self) -> SortSpec<R::SortField> {
        self.sort
    }

    /// The derived view as of the last state change.
    pub fn view(&self) -> &DerivedView<R> {
        &self.derived
    }

    pub fn items(&self) -> &[R] {
        &self.derived.items
    }

    pub fn summary(&self) -> &R::Summary {
        &self.derived.summary
    }

    /// Compute the derived view from current state without touching the cached copy.
    pub fn derive_view(&self) -> DerivedView<R> {
        derive_view(&self.base, &self.criteria, self.sort)
    }

    /// Number of times the derived view has been recomputed, construction included.
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    /// Selected values of one classificatory field.
    pub fn selected_values(&self, field: <R::Facet as Facet>::Field) -> Vec<R::Facet> {
        self.criteria.selected(field)
    }

    // -- Filter and sort setters -------------------------------------------

    /// Replace the free-text filter. An empty string clears it.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.criteria.set_query(text);
        self.recompute();
    }

    /// Add or remove one facet value from its field's selection.
    pub fn toggle_filter_value(&mut self, value: R::Facet) {
        self.criteria.toggle(value);
        self.recompute();
    }

    /// Select a sort field, flipping direction if it is already the current one.
    pub fn set_sort(&mut self, field: R::SortField) {
        self.sort = self.sort.toggled(field);
        self.recompute();
    }

    /// Reset search text and every selection, keeping the sort.
    pub fn clear_all_filters(&mut self) {
        self.criteria.clear();
        self.recompute();
    }

    /// Apply several filter/sort changes with a single recomputation.
    pub fn batch<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut ViewEdit<'_, R>),
    {
        let mut handle = ViewEdit {
            criteria: &mut self.criteria,
            sort: &mut self.sort,
        };
        edit(&mut handle);
        self.recompute();
    }

    // -- Selection and dialogs ---------------------------------------------

    /// Mark the record with `id` as the active selection.
    ///
    /// Returns `false` and leaves the selection unchanged when `id` is unknown.
    pub fn select_item<Q>(&mut self, id: &Q) -> bool
    where
        R::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let Some(record) = self.base.iter().find(|r| r.id().borrow() == id) else {
            return false;
        };
        self.selection.select(record.id().clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The currently selected record, resolved against the base collection.
    pub fn selected(&self) -> Option<&R> {
        let id = self.selection.selected()?;
        self.base.iter().find(|r| r.id() == id)
    }

    pub fn selection(&self) -> &SelectionState<R::Id> {
        &self.selection
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.selection.open(dialog);
    }

    /// Select a record and open a dialog on it in one step.
    pub fn open_dialog_for<Q>(&mut self, id: &Q, dialog: Dialog) -> bool
    where
        R::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if !self.select_item(id) {
            return false;
        }
        self.selection.open(dialog);
        true
    }

    pub fn close_dialog(&mut self, dialog: Dialog) {
        self.selection.close(dialog);
    }

    pub fn is_dialog_open(&self, dialog: Dialog) -> bool {
        self.selection.is_open(dialog)
    }

    // -- Base collection mutations -----------------------------------------

    /// Apply `patch` to the record with `id`, replacing the base collection.
    ///
    /// Unknown ids are a no-op and return `false`. A patch that changes the
    /// record's id is rejected the same way, leaving the base untouched.
    pub fn update_item<Q, F>(&mut self, id: &Q, patch: F) -> bool
    where
        R::Id: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
        F: FnOnce(&mut R),
    {
        if !collection::contains_id(&self.base, id) {
            tracing::debug!(domain = R::DOMAIN, ?id, "update skipped: unknown id");
            return false;
        }
        match collection::update_by_id(&self.base, id, patch) {
            Some(next) => {
                self.base = next;
                self.recompute();
                true
            }
            None => {
                tracing::warn!(
                    domain = R::DOMAIN,
                    ?id,
                    "update rejected: patch changed the id"
                );
                false
            }
        }
    }

    /// Remove the record with `id`, replacing the base collection.
    ///
    /// Unknown ids are a no-op and return `false`. Removing the selected record
    /// clears the selection.
    pub fn remove_item<Q>(&mut self, id: &Q) -> bool
    where
        R::Id: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        if !collection::contains_id(&self.base, id) {
            tracing::debug!(domain = R::DOMAIN, ?id, "remove skipped: unknown id");
            return false;
        }
        self.base = collection::remove_by_id(&self.base, id);
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.derived = derive_view(&self.base, &self.criteria, self.sort);
        self.recomputations += 1;
        tracing::debug!(
            domain = R::DOMAIN,
            items = self.derived.len(),
            revision = self.recomputations,
            "derived view recomputed"
        );
    }
}
