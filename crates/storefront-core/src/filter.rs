//! Filter criteria and the predicate that applies them.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Inclusive price interval `[min, max]`; `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// `min <= price <= max`. A range with `min > max` contains nothing.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// The user's active filter selection.
///
/// Empty vectors and a `None` price range impose no constraint. Fields are
/// combined with AND; values inside a field are combined with OR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_range: Option<PriceRange>,
}

impl FilterCriteria {
    /// Returns `true` when no field constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.price_range.is_none()
    }

    /// Overwrites every field present in `patch`, leaving the others alone.
    ///
    /// This is a per-field replacement, never a union: patching `colors`
    /// with `["Azul"]` drops any previously selected colors.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
        if let Some(sizes) = patch.sizes {
            self.sizes = sizes;
        }
        if let Some(price_range) = patch.price_range {
            self.price_range = price_range;
        }
    }

    /// Returns `true` if `product` satisfies every present field.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.colors.is_empty() && !self.colors.iter().any(|c| *c == product.color) {
            return false;
        }

        if !self.sizes.is_empty() && !self.sizes.iter().any(|s| product.has_size(s)) {
            return false;
        }

        self.price_range
            .is_none_or(|range| range.contains(product.price))
    }
}

/// A partial update to [`FilterCriteria`]: `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub colors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub price_range: Option<Option<PriceRange>>,
}

impl FilterPatch {
    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(Some(range));
        self
    }

    /// Removes the price constraint when merged.
    #[must_use]
    pub fn clear_price_range(mut self) -> Self {
        self.price_range = Some(None);
        self
    }
}

/// Keeps the products matching `criteria`, preserving their relative order.
#[must_use]
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
