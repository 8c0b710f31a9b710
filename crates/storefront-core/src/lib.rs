//! Catalog query engine and minicart for the storefront.
//!
//! Everything in this crate is a pure, synchronous transformation over an
//! in-memory product list. Fetching the catalog lives in
//! `storefront-catalog`; rendering lives in the CLI.

pub mod app_config;
pub mod cart;
pub mod config;
pub mod facets;
pub mod filter;
pub mod pagination;
pub mod product;
pub mod query;
pub mod session;
pub mod sort;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartChange, CartLine, CartTotals, LineSnapshot};
pub use config::{load_app_config, load_app_config_from_env};
pub use facets::{
    derive_facets, distinct_colors, distinct_dates, distinct_prices, distinct_sizes,
    price_breakpoints, Facets, PriceBucket, SIZE_ORDER,
};
pub use filter::{apply_filters, FilterCriteria, FilterPatch, PriceRange};
pub use pagination::{paginate, ItemsCursor, PAGE_INCREMENT};
pub use product::{dedup_by_id, Product};
pub use query::{CatalogQuery, ShelfView};
pub use session::{Action, Outcome, Session};
pub use sort::{sort_by, SortDirection, SortKey, SortOption};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
