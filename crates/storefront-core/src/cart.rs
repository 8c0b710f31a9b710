//! Session-only minicart.
//!
//! Lines are keyed by product id and kept in insertion order. Mutations
//! report what changed as a [`CartChange`] so whatever renders the cart can
//! redraw from [`Cart::lines`] and [`Cart::totals`] without the cart knowing
//! about it.

use serde::Serialize;

use crate::product::Product;

/// Display fields copied from the catalog when a line is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSnapshot {
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl From<&Product> for LineSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// One aggregated cart entry per distinct product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Figures shown on the minicart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    /// Number of distinct product lines.
    pub line_count: usize,
    /// Sum of line quantities; this is the badge figure and counts the same
    /// units as `subtotal`.
    pub unit_count: u64,
    /// Sum of `price * quantity` over all lines.
    pub subtotal: f64,
}

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was created with quantity 1.
    Added { product_id: String },
    /// An existing line's quantity went up by one.
    Incremented { product_id: String, quantity: u32 },
    /// The whole line was deleted.
    Removed { product_id: String },
    /// Nothing matched; the cart is as it was.
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product_id`.
    ///
    /// An existing line only has its quantity incremented; its display
    /// fields are left untouched. Otherwise a new line with quantity 1 is
    /// appended using `snapshot`.
    pub fn add_item(&mut self, product_id: &str, snapshot: LineSnapshot) -> CartChange {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(product_id, quantity = line.quantity, "cart line incremented");
            return CartChange::Incremented {
                product_id: product_id.to_owned(),
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLine {
            product_id: product_id.to_owned(),
            name: snapshot.name,
            price: snapshot.price,
            image: snapshot.image,
            quantity: 1,
        });
        tracing::debug!(product_id, "cart line added");
        CartChange::Added {
            product_id: product_id.to_owned(),
        }
    }

    /// Adds one unit of `product`, copying its display fields.
    pub fn add_product(&mut self, product: &Product) -> CartChange {
        self.add_item(&product.id, LineSnapshot::from(product))
    }

    /// Deletes the whole line for `product_id`; absent ids are a no-op.
    pub fn remove_item(&mut self, product_id: &str) -> CartChange {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() < len_before {
            tracing::debug!(product_id, "cart line removed");
            CartChange::Removed {
                product_id: product_id.to_owned(),
            }
        } else {
            CartChange::Unchanged
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            line_count: self.lines.len(),
            unit_count: self.lines.iter().map(|l| u64::from(l.quantity)).sum(),
            subtotal: self.lines.iter().map(CartLine::line_total).sum(),
        }
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
