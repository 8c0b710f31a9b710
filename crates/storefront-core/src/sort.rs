//! Stable, non-mutating product ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Product field a shelf can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Price,
    Color,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortKey {
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Color => a.color.cmp(&b.color),
            SortKey::Name => a.name.cmp(&b.name),
        }
    }
}

/// Returns a copy of `products` ordered by `key` in `direction`.
///
/// The sort is stable in both directions: products that compare equal keep
/// their input order, so a descending sort is not simply the reverse of an
/// ascending one when ties exist.
#[must_use]
pub fn sort_by(products: &[Product], key: SortKey, direction: SortDirection) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Entries of the shelf's "order by" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    ColorAsc,
    ColorDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 7] = [
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::ColorAsc,
        SortOption::ColorDesc,
    ];

    #[must_use]
    pub fn key_and_direction(self) -> (SortKey, SortDirection) {
        match self {
            SortOption::Newest => (SortKey::Date, SortDirection::Desc),
            SortOption::PriceAsc => (SortKey::Price, SortDirection::Asc),
            SortOption::PriceDesc => (SortKey::Price, SortDirection::Desc),
            SortOption::NameAsc => (SortKey::Name, SortDirection::Asc),
            SortOption::NameDesc => (SortKey::Name, SortDirection::Desc),
            SortOption::ColorAsc => (SortKey::Color, SortDirection::Asc),
            SortOption::ColorDesc => (SortKey::Color, SortDirection::Desc),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::ColorAsc => "color-asc",
            SortOption::ColorDesc => "color-desc",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Lowest price",
            SortOption::PriceDesc => "Highest price",
            SortOption::NameAsc => "Name: A to Z",
            SortOption::NameDesc => "Name: Z to A",
            SortOption::ColorAsc => "Color: A to Z",
            SortOption::ColorDesc => "Color: Z to A",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortOption::ALL.iter().map(|o| o.as_str()).collect();
                format!("unknown sort option \"{s}\" (expected one of: {})", valid.join(", "))
            })
    }
}
