//! Single dispatch point for shelf and minicart interactions.
//!
//! Front ends translate user input into [`Action`]s keyed by stable product
//! ids and hand them to [`Session::dispatch`]; they never hold references
//! into the engine and re-render from the returned [`Outcome`].

use crate::cart::{Cart, CartChange};
use crate::filter::FilterPatch;
use crate::product::Product;
use crate::query::{CatalogQuery, ShelfView};
use crate::sort::SortOption;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Sort(SortOption),
    Filter(FilterPatch),
    ClearFilters,
    ShowMore,
    AddToCart(String),
    RemoveFromCart(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The shelf must be re-rendered.
    ViewChanged,
    /// The minicart must be re-rendered.
    CartChanged(CartChange),
    /// The action had no effect.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    query: CatalogQuery,
    cart: Cart,
}

impl Session {
    #[must_use]
    pub fn new(query: CatalogQuery) -> Self {
        Self {
            query,
            cart: Cart::new(),
        }
    }

    /// Starts a session over `catalog` with the default window size.
    #[must_use]
    pub fn from_catalog(catalog: Vec<Product>) -> Self {
        Self::new(CatalogQuery::new(catalog))
    }

    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn view(&self) -> ShelfView {
        self.query.view()
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::Sort(option) => {
                self.query.apply_sort_option(option);
                Outcome::ViewChanged
            }
            Action::Filter(patch) => {
                self.query.set_filters(patch);
                Outcome::ViewChanged
            }
            Action::ClearFilters => {
                self.query.clear_filters();
                Outcome::ViewChanged
            }
            Action::ShowMore => {
                if self.query.show_more() {
                    Outcome::ViewChanged
                } else {
                    Outcome::Ignored
                }
            }
            Action::AddToCart(product_id) => match self.query.product(&product_id) {
                Some(product) => Outcome::CartChanged(self.cart.add_product(product)),
                None => {
                    tracing::warn!(product_id = %product_id, "add to cart ignored: product not in catalog");
                    Outcome::Ignored
                }
            },
            Action::RemoveFromCart(product_id) => match self.cart.remove_item(&product_id) {
                CartChange::Unchanged => Outcome::Ignored,
                change => Outcome::CartChanged(change),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str, color: &str, price: f64) -> Product {
        Product {
            id: id.to_owned(),
            name: format!("Product {id}"),
            price,
            installment: vec![2.0],
            color: color.to_owned(),
            image: String::new(),
            size: vec!["P".to_owned()],
            date: format!("2020-02-{id:0>2}"),
        }
    }

    fn session(len: u32) -> Session {
        let catalog = (1..=len)
            .map(|i| {
                let color = if i % 2 == 0 { "Azul" } else { "Preto" };
                make_product(&i.to_string(), color, f64::from(i))
            })
            .collect();
        Session::from_catalog(catalog)
    }

    #[test]
    fn add_to_cart_uses_catalog_snapshot() {
        let mut session = session(3);
        let outcome = session.dispatch(Action::AddToCart("2".to_owned()));
        assert_eq!(
            outcome,
            Outcome::CartChanged(CartChange::Added {
                product_id: "2".to_owned()
            })
        );
        let line = session.cart().line("2").expect("expected a cart line");
        assert_eq!(line.name, "Product 2");
        assert!((line.price - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_to_cart_works_for_products_hidden_by_filters() {
        let mut session = session(3);
        session.dispatch(Action::Filter(FilterPatch::default().colors(["Azul"])));
        let outcome = session.dispatch(Action::AddToCart("1".to_owned()));
        assert!(matches!(outcome, Outcome::CartChanged(CartChange::Added { .. })));
    }

    #[test]
    fn add_unknown_product_is_ignored() {
        let mut session = session(3);
        assert_eq!(
            session.dispatch(Action::AddToCart("404".to_owned())),
            Outcome::Ignored
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn remove_missing_line_is_ignored() {
        let mut session = session(3);
        assert_eq!(
            session.dispatch(Action::RemoveFromCart("1".to_owned())),
            Outcome::Ignored
        );
    }

    #[test]
    fn remove_existing_line_reports_removal() {
        let mut session = session(3);
        session.dispatch(Action::AddToCart("1".to_owned()));
        session.dispatch(Action::AddToCart("1".to_owned()));
        assert_eq!(
            session.dispatch(Action::RemoveFromCart("1".to_owned())),
            Outcome::CartChanged(CartChange::Removed {
                product_id: "1".to_owned()
            })
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn show_more_ignored_once_everything_is_visible() {
        let mut session = session(8);
        assert_eq!(session.dispatch(Action::ShowMore), Outcome::ViewChanged);
        assert_eq!(session.view().products.len(), 8);
        assert_eq!(session.dispatch(Action::ShowMore), Outcome::Ignored);
    }

    #[test]
    fn sort_filter_and_clear_change_the_view() {
        let mut session = session(4);
        assert_eq!(
            session.dispatch(Action::Sort(SortOption::PriceDesc)),
            Outcome::ViewChanged
        );
        assert_eq!(
            session.dispatch(Action::Filter(FilterPatch::default().colors(["Preto"]))),
            Outcome::ViewChanged
        );
        let ids: Vec<String> = session.view().products.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "1"]);

        assert_eq!(session.dispatch(Action::ClearFilters), Outcome::ViewChanged);
        assert_eq!(session.view().total_matching, 4);
    }

    #[test]
    fn cart_is_independent_of_shelf_state() {
        let mut session = session(4);
        session.dispatch(Action::AddToCart("4".to_owned()));
        session.dispatch(Action::Sort(SortOption::Newest));
        session.dispatch(Action::Filter(FilterPatch::default().colors(["Preto"])));
        assert_eq!(session.cart().totals().unit_count, 1);
        assert_eq!(session.cart().lines()[0].product_id, "4");
    }
}
