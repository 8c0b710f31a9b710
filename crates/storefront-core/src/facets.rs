//! Facet vocabularies derived from the full catalog.
//!
//! Facets feed the filter controls, so they are always computed over the
//! whole catalog and never over the currently filtered view.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::filter::PriceRange;
use crate::product::Product;

/// Display order of the size facet.
pub const SIZE_ORDER: [&str; 5] = ["P", "M", "G", "GG", "U"];

/// Every selectable facet value of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facets {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_buckets: Vec<PriceBucket>,
    pub dates: Vec<String>,
}

/// One price bucket of the price facet, `[min, max)`.
///
/// `max: None` marks the final open-ended "from `min`" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBucket {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBucket {
    /// Half-open membership test: `min <= price < max`.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price < max)
    }

    /// Returns `true` for the final open-ended bucket.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }

    /// The inclusive range applied when this bucket is picked as a filter.
    #[must_use]
    pub fn as_range(&self) -> PriceRange {
        PriceRange {
            min: self.min,
            max: self.max,
        }
    }
}

/// Distinct `color` values, sorted ascending.
#[must_use]
pub fn distinct_colors(catalog: &[Product]) -> Vec<String> {
    catalog
        .iter()
        .map(|p| p.color.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Union of every product's sizes, ordered by [`SIZE_ORDER`].
///
/// Sizes outside the vocabulary follow all known sizes, in lexicographic
/// order among themselves.
#[must_use]
pub fn distinct_sizes(catalog: &[Product]) -> Vec<String> {
    let mut sizes: Vec<String> = catalog
        .iter()
        .flat_map(|p| p.size.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    sizes.sort_by(|a, b| compare_sizes(a, b));
    sizes
}

fn compare_sizes(a: &str, b: &str) -> Ordering {
    let rank = |s: &str| SIZE_ORDER.iter().position(|known| *known == s);
    match (rank(a), rank(b)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Distinct prices, ascending. `NaN` prices are skipped.
#[must_use]
pub fn distinct_prices(catalog: &[Product]) -> Vec<f64> {
    let mut prices: Vec<f64> = catalog
        .iter()
        .map(|p| p.price)
        .filter(|price| !price.is_nan())
        .collect();
    prices.sort_by(f64::total_cmp);
    prices.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);
    prices
}

/// Price buckets delimited by `[0, min, mid, max, +inf]`.
///
/// `mid` is the median element of the distinct sorted prices
/// (`prices[len / 2]`). A catalog with fewer than two distinct prices has no
/// meaningful buckets and yields an empty list.
#[must_use]
pub fn price_breakpoints(catalog: &[Product]) -> Vec<PriceBucket> {
    let prices = distinct_prices(catalog);
    if prices.len() < 2 {
        return Vec::new();
    }

    let min = prices[0];
    let mid = prices[prices.len() / 2];
    let max = prices[prices.len() - 1];

    vec![
        PriceBucket {
            min: 0.0,
            max: Some(min),
        },
        PriceBucket {
            min,
            max: Some(mid),
        },
        PriceBucket {
            min: mid,
            max: Some(max),
        },
        PriceBucket {
            min: max,
            max: None,
        },
    ]
}

/// Distinct `date` values, sorted ascending.
#[must_use]
pub fn distinct_dates(catalog: &[Product]) -> Vec<String> {
    catalog
        .iter()
        .map(|p| p.date.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Derives every facet of `catalog` in one pass per facet.
#[must_use]
pub fn derive_facets(catalog: &[Product]) -> Facets {
    Facets {
        colors: distinct_colors(catalog),
        sizes: distinct_sizes(catalog),
        price_buckets: price_breakpoints(catalog),
        dates: distinct_dates(catalog),
    }
}

#[cfg(test)]
#[path = "facets_test.rs"]
mod tests;
