//! The catalog query engine: sort baseline, filters and pagination.
//!
//! The engine keeps two snapshots of the catalog, the original fetch order
//! and the sort baseline, plus the active criteria and cursor. Every derived
//! view is rebuilt from `baseline -> filter -> slice` on demand, so filters
//! never destroy information and can be changed in any order.

use serde::Serialize;

use crate::facets::{derive_facets, Facets};
use crate::filter::{apply_filters, FilterCriteria, FilterPatch};
use crate::pagination::{paginate, ItemsCursor};
use crate::product::{dedup_by_id, Product};
use crate::sort::{sort_by, SortDirection, SortKey, SortOption};

/// What the shelf shows for the current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShelfView {
    /// The visible window, in display order.
    pub products: Vec<Product>,
    /// Number of products matching the active filters.
    pub total_matching: usize,
    /// `true` when "show more" would reveal additional products.
    pub has_more: bool,
}

impl ShelfView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matching == 0
    }
}

/// Session-local query state over one catalog snapshot.
///
/// `CatalogQuery::default()` is the idle state: no catalog, every view
/// empty.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    catalog: Vec<Product>,
    baseline: Vec<Product>,
    criteria: FilterCriteria,
    sort: Option<SortOption>,
    cursor: ItemsCursor,
    loaded: bool,
}

impl CatalogQuery {
    /// Loads a catalog. Duplicate ids are dropped (first occurrence wins)
    /// and the baseline starts in fetch order.
    #[must_use]
    pub fn new(catalog: Vec<Product>) -> Self {
        let catalog = dedup_by_id(catalog);
        tracing::debug!(products = catalog.len(), "catalog loaded into query engine");
        Self {
            baseline: catalog.clone(),
            catalog,
            loaded: true,
            ..Self::default()
        }
    }

    /// Same as [`CatalogQuery::new`] with a custom first window size.
    #[must_use]
    pub fn with_items_to_show(catalog: Vec<Product>, items_to_show: usize) -> Self {
        let mut query = Self::new(catalog);
        query.cursor = ItemsCursor::new(items_to_show);
        query
    }

    /// Returns `true` once a catalog has been loaded, including an empty one.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The catalog in original fetch order.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The catalog in the order established by the last sort.
    #[must_use]
    pub fn baseline(&self) -> &[Product] {
        &self.baseline
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn sort_option(&self) -> Option<SortOption> {
        self.sort
    }

    #[must_use]
    pub fn cursor(&self) -> ItemsCursor {
        self.cursor
    }

    /// Looks a product up by id in the full catalog.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Facets of the full catalog, independent of the active filters.
    #[must_use]
    pub fn facets(&self) -> Facets {
        derive_facets(&self.catalog)
    }

    /// Re-seeds the baseline with a stable sort of the current baseline.
    ///
    /// The baseline always holds the whole catalog, so sorting while a
    /// filter is active does not lose the products the filter hides.
    pub fn sort(&mut self, key: SortKey, direction: SortDirection) {
        self.baseline = sort_by(&self.baseline, key, direction);
        self.sort = None;
        tracing::debug!(?key, ?direction, "sort baseline re-seeded");
    }

    /// Applies one of the shelf's menu orderings.
    pub fn apply_sort_option(&mut self, option: SortOption) {
        let (key, direction) = option.key_and_direction();
        self.sort(key, direction);
        self.sort = Some(option);
    }

    /// Merges `patch` into the active criteria.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.criteria.merge(patch);
        tracing::debug!(criteria = ?self.criteria, "filters updated");
    }

    /// Drops every filter.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        tracing::debug!("filters cleared");
    }

    pub fn set_items_to_show(&mut self, items_to_show: usize) {
        self.cursor.set_items_to_show(items_to_show);
    }

    /// Widens the visible window by one increment, clamped at the number of
    /// matching products. Returns `false` when everything is already shown.
    pub fn show_more(&mut self) -> bool {
        let len = self.filtered().len();
        self.cursor.show_more(len)
    }

    /// Baseline products matching the active criteria, in baseline order.
    #[must_use]
    pub fn filtered(&self) -> Vec<Product> {
        apply_filters(&self.baseline, &self.criteria)
    }

    /// Rebuilds the shelf from scratch for the current state.
    #[must_use]
    pub fn view(&self) -> ShelfView {
        let filtered = self.filtered();
        ShelfView {
            products: paginate(&filtered, self.cursor).to_vec(),
            total_matching: filtered.len(),
            has_more: self.cursor.has_more(filtered.len()),
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
