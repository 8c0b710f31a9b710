use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A catalog entry as served by `GET /products`.
///
/// Field names match the JSON payload exactly. Products are read-only for
/// the whole session once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique key within a catalog snapshot.
    pub id: String,
    pub name: String,
    /// Non-negative decimal amount, e.g. `99.9`.
    pub price: f64,
    /// `installment[0]` is the number of installments advertised on the shelf.
    ///
    /// Live payloads carry the per-installment amount as a second, fractional
    /// element (`[3, 9.33]`), so the elements are decoded as `f64`.
    #[serde(default)]
    pub installment: Vec<f64>,
    pub color: String,
    /// Opaque image path, e.g. `"/img/img_2.png"`.
    pub image: String,
    /// Every size this product is offered in, e.g. `["P", "M", "G"]`.
    #[serde(default)]
    pub size: Vec<String>,
    /// ISO date (`"2020-07-13"`); lexicographic order is chronological order.
    pub date: String,
}

impl Product {
    /// Number of installments the product can be split into, when the first
    /// `installment` element is a positive whole number.
    #[must_use]
    pub fn installment_count(&self) -> Option<u32> {
        let first = *self.installment.first()?;
        if first >= 1.0 && first.fract() == 0.0 && first <= f64::from(u32::MAX) {
            // Range and integrality checked above.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(first as u32)
        } else {
            None
        }
    }

    /// Installment count and the amount of each installment, for the
    /// "up to Nx of ..." shelf line.
    #[must_use]
    pub fn installment_plan(&self) -> Option<(u32, f64)> {
        let count = self.installment_count()?;
        Some((count, self.price / f64::from(count)))
    }

    /// Returns `true` if `size` is one of the sizes this product is offered in.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.size.iter().any(|s| s == size)
    }
}

/// Drops every product whose `id` was already seen, keeping the first
/// occurrence and the original order.
///
/// Catalog uniqueness by `id` is an invariant the query engine and the cart
/// rely on; feeds are not trusted to uphold it.
#[must_use]
pub fn dedup_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<String> = HashSet::with_capacity(products.len());
    products
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
