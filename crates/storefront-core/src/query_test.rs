use super::*;
use crate::filter::PriceRange;

fn make_product(id: &str, color: &str, sizes: &[&str], price: f64, date: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        price,
        installment: vec![5.0],
        color: color.to_owned(),
        image: format!("/img/img_{id}.png"),
        size: sizes.iter().map(|s| (*s).to_owned()).collect(),
        date: date.to_owned(),
    }
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

/// Ten products; odd ids are "Preto", even ids are "Azul".
fn catalog() -> Vec<Product> {
    (1..=10)
        .map(|i| {
            let color = if i % 2 == 1 { "Preto" } else { "Azul" };
            let size = if i <= 5 { "M" } else { "G" };
            let date = format!("2020-01-{i:02}");
            make_product(&i.to_string(), color, &[size], f64::from(i) * 10.0, &date)
        })
        .collect()
}

#[test]
fn default_engine_is_idle_and_empty() {
    let query = CatalogQuery::default();
    assert!(!query.is_loaded());
    let view = query.view();
    assert!(view.is_empty());
    assert!(view.products.is_empty());
    assert!(!view.has_more);
    assert_eq!(query.facets(), Facets::default());
}

#[test]
fn empty_catalog_is_loaded_with_empty_view() {
    let query = CatalogQuery::new(Vec::new());
    assert!(query.is_loaded());
    assert!(query.view().is_empty());
}

#[test]
fn new_drops_duplicate_ids() {
    let mut products = catalog();
    products.push(make_product("3", "Rosa", &["U"], 999.0, "2030-01-01"));
    let query = CatalogQuery::new(products);
    assert_eq!(query.catalog().len(), 10);
    assert_eq!(query.product("3").map(|p| p.color.as_str()), Some("Preto"));
}

#[test]
fn initial_view_shows_first_page_in_fetch_order() {
    let query = CatalogQuery::new(catalog());
    let view = query.view();
    assert_eq!(ids(&view.products), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(view.total_matching, 10);
    assert!(view.has_more);
}

#[test]
fn show_more_reveals_the_rest_and_stops() {
    let mut query = CatalogQuery::new(catalog());
    assert!(query.show_more());
    let view = query.view();
    assert_eq!(view.products.len(), 10);
    assert!(!view.has_more);
    assert!(!query.show_more());
}

#[test]
fn custom_first_window() {
    let query = CatalogQuery::with_items_to_show(catalog(), 3);
    assert_eq!(ids(&query.view().products), vec!["1", "2", "3"]);
}

#[test]
fn set_items_to_show_resizes_window() {
    let mut query = CatalogQuery::new(catalog());
    query.set_items_to_show(2);
    assert_eq!(query.view().products.len(), 2);
    query.set_items_to_show(50);
    assert_eq!(query.view().products.len(), 10);
}

#[test]
fn filters_apply_against_baseline_not_previous_result() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().colors(["Preto"]));
    assert_eq!(query.view().total_matching, 5);

    // Replacing the color selection widens the result again.
    query.set_filters(FilterPatch::default().colors(["Azul"]));
    assert_eq!(
        ids(&query.filtered()),
        vec!["2", "4", "6", "8", "10"]
    );
}

#[test]
fn filter_patches_merge_per_field() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().colors(["Preto"]));
    query.set_filters(FilterPatch::default().sizes(["G"]));
    assert_eq!(ids(&query.filtered()), vec!["7", "9"]);

    query.set_filters(FilterPatch::default().price_range(PriceRange::new(80.0, None)));
    assert_eq!(ids(&query.filtered()), vec!["9"]);

    query.set_filters(FilterPatch::default().clear_price_range());
    assert_eq!(ids(&query.filtered()), vec!["7", "9"]);
}

#[test]
fn clear_filters_restores_baseline() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().colors(["Preto"]).sizes(["M"]));
    query.clear_filters();
    assert!(query.criteria().is_empty());
    assert_eq!(query.filtered(), query.baseline().to_vec());
}

#[test]
fn sorting_reseeds_baseline_for_later_filters() {
    let mut query = CatalogQuery::new(catalog());
    query.apply_sort_option(SortOption::PriceDesc);
    query.set_filters(FilterPatch::default().colors(["Azul"]));
    assert_eq!(ids(&query.filtered()), vec!["10", "8", "6", "4", "2"]);
    assert_eq!(query.sort_option(), Some(SortOption::PriceDesc));
}

#[test]
fn sorting_while_filtered_keeps_hidden_products() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().colors(["Preto"]));
    query.apply_sort_option(SortOption::Newest);
    query.clear_filters();
    assert_eq!(query.view().total_matching, 10);
    assert_eq!(query.baseline().first().map(|p| p.id.as_str()), Some("10"));
}

#[test]
fn sorting_leaves_fetch_order_untouched() {
    let mut query = CatalogQuery::new(catalog());
    query.sort(SortKey::Price, SortDirection::Desc);
    assert_eq!(query.catalog().first().map(|p| p.id.as_str()), Some("1"));
    assert_eq!(query.baseline().first().map(|p| p.id.as_str()), Some("10"));
    assert_eq!(query.sort_option(), None);
}

#[test]
fn later_sort_is_stable_over_previous_baseline() {
    let products = vec![
        make_product("a", "Preto", &[], 20.0, "2020-01-01"),
        make_product("b", "Azul", &[], 10.0, "2020-01-01"),
        make_product("c", "Amarelo", &[], 20.0, "2020-01-01"),
    ];
    let mut query = CatalogQuery::new(products);
    query.sort(SortKey::Color, SortDirection::Asc);
    query.sort(SortKey::Price, SortDirection::Asc);
    // Equal prices keep the color order from the previous sort.
    assert_eq!(ids(query.baseline()), vec!["b", "c", "a"]);
}

#[test]
fn no_match_view_is_empty_without_more() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().colors(["Verde"]));
    let view = query.view();
    assert!(view.is_empty());
    assert!(!view.has_more);
}

#[test]
fn view_is_recomputed_idempotently() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().sizes(["M"]));
    assert_eq!(query.view(), query.view());
}

#[test]
fn facets_ignore_active_filters() {
    let mut query = CatalogQuery::new(catalog());
    query.set_filters(FilterPatch::default().colors(["Preto"]));
    assert_eq!(query.facets().colors, vec!["Azul", "Preto"]);
    assert_eq!(query.facets().sizes, vec!["M", "G"]);
}

#[test]
fn product_lookup_by_id() {
    let query = CatalogQuery::new(catalog());
    assert_eq!(query.product("4").map(|p| p.price), Some(40.0));
    assert!(query.product("404").is_none());
}
