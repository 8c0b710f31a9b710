//! Translates command-line arguments into session actions.

use clap::Args;
use storefront_core::{Action, FilterPatch, Outcome, PriceRange, Session, SortOption};

#[derive(Debug, Default, Args)]
pub struct BrowseArgs {
    /// Shelf order: newest, price-asc, price-desc, name-asc, name-desc, color-asc, color-desc
    #[arg(long)]
    pub sort: Option<SortOption>,
    /// Keep products of this color (repeatable)
    #[arg(long = "color")]
    pub colors: Vec<String>,
    /// Keep products offered in this size (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,
    /// Lowest price to keep, inclusive
    #[arg(long)]
    pub price_min: Option<f64>,
    /// Highest price to keep, inclusive
    #[arg(long)]
    pub price_max: Option<f64>,
    /// Number of "show more" steps to take after filtering
    #[arg(long, default_value_t = 0)]
    pub more: u32,
}

impl BrowseArgs {
    /// Sort first, then one filter patch, then the "show more" steps.
    pub fn into_actions(self) -> Vec<Action> {
        let mut actions = Vec::new();

        if let Some(option) = self.sort {
            actions.push(Action::Sort(option));
        }

        let mut patch = FilterPatch::default();
        if !self.colors.is_empty() {
            patch = patch.colors(self.colors);
        }
        if !self.sizes.is_empty() {
            patch = patch.sizes(self.sizes);
        }
        if self.price_min.is_some() || self.price_max.is_some() {
            patch = patch.price_range(PriceRange::new(
                self.price_min.unwrap_or(0.0),
                self.price_max,
            ));
        }
        if patch != FilterPatch::default() {
            actions.push(Action::Filter(patch));
        }

        actions.extend((0..self.more).map(|_| Action::ShowMore));
        actions
    }
}

#[derive(Debug, Default, Args)]
pub struct CartArgs {
    /// Add one unit of this product id (repeatable)
    #[arg(long = "add")]
    pub add: Vec<String>,
    /// Remove the whole line for this product id (repeatable)
    #[arg(long = "remove")]
    pub remove: Vec<String>,
}

impl CartArgs {
    /// All additions in order, then all removals.
    pub fn into_actions(self) -> Vec<Action> {
        self.add
            .into_iter()
            .map(Action::AddToCart)
            .chain(self.remove.into_iter().map(Action::RemoveFromCart))
            .collect()
    }
}

/// Dispatches `actions` in order, returning how many had an effect.
pub fn run(session: &mut Session, actions: Vec<Action>) -> usize {
    let mut applied = 0;
    for action in actions {
        if session.dispatch(action) == Outcome::Ignored {
            continue;
        }
        applied += 1;
    }
    applied
}
