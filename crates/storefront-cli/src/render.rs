//! Plain-text rendering of facets, the shelf and the minicart.
//!
//! Each function rebuilds its whole output from the state it is given.

use std::fmt::Write as _;

use storefront_core::{Cart, Facets, PriceBucket, Product, ShelfView};

pub(crate) const EMPTY_SHELF: &str = "No products match the selected filters.";
pub(crate) const EMPTY_CART: &str = "Your cart is empty.";

pub(crate) fn format_price(price: f64) -> String {
    format!("R$ {price:.2}")
}

fn bucket_label(bucket: &PriceBucket) -> String {
    match bucket.max {
        Some(max) => format!("{} to {}", format_price(bucket.min), format_price(max)),
        None => format!("from {}", format_price(bucket.min)),
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_owned()
    } else {
        values.join(", ")
    }
}

pub(crate) fn render_facets(facets: &Facets) -> String {
    let prices: Vec<String> = facets.price_buckets.iter().map(bucket_label).collect();

    let mut out = String::new();
    let _ = writeln!(out, "{:<8}{}", "COLORS", join_or_dash(&facets.colors));
    let _ = writeln!(out, "{:<8}{}", "SIZES", join_or_dash(&facets.sizes));
    let _ = writeln!(out, "{:<8}{}", "PRICES", join_or_dash(&prices));
    let _ = writeln!(out, "{:<8}{}", "DATES", join_or_dash(&facets.dates));
    out
}

fn render_product(out: &mut String, product: &Product) {
    let _ = writeln!(out, "[{}] {}", product.id, product.name);
    let _ = writeln!(out, "    {}", format_price(product.price));
    if let Some((count, each)) = product.installment_plan() {
        let _ = writeln!(out, "    up to {count}x of {}", format_price(each));
    }
}

pub(crate) fn render_shelf(view: &ShelfView) -> String {
    if view.is_empty() {
        return format!("{EMPTY_SHELF}\n");
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Showing {} of {} products",
        view.products.len(),
        view.total_matching
    );
    for product in &view.products {
        render_product(&mut out, product);
    }
    if view.has_more {
        out.push_str("(more products available: use --more)\n");
    }
    out
}

pub(crate) fn render_cart(cart: &Cart) -> String {
    let totals = cart.totals();

    let mut out = String::new();
    let _ = writeln!(out, "Cart ({})", totals.unit_count);
    if cart.is_empty() {
        let _ = writeln!(out, "{EMPTY_CART}");
        return out;
    }
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "{:>3}x {:<32}{:>12}  [{}]",
            line.quantity,
            line.name,
            format_price(line.line_total()),
            line.product_id
        );
    }
    let _ = writeln!(out, "Subtotal: {}", format_price(totals.subtotal));
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
