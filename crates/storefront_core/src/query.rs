//! Shop grid filtering and sorting.
//!
//! The grid is a pure function of the catalog snapshot and a [`ShopQuery`]: filters run
//! first, then the sort. Nothing here mutates the catalog.

use std::collections::BTreeSet;

use crate::model::Product;

/// Token used by the color select for "no color filter".
pub const ALL_COLORS: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Price ordering applied after filtering.
pub enum SortMode {
    /// Stored order.
    #[default]
    None,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
}

impl SortMode {
    /// Select-option value for this mode.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAscending => "asc",
            Self::PriceDescending => "desc",
        }
    }

    /// Parses a select-option value. Unknown values mean stored order.
    pub fn from_token(token: &str) -> Self {
        match token {
            "asc" => Self::PriceAscending,
            "desc" => Self::PriceDescending,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Current state of the shop's sort, color and search controls.
pub struct ShopQuery {
    /// Price ordering.
    pub sort: SortMode,
    /// Color to match (case-insensitive), or `None` for every color.
    pub color: Option<String>,
    /// Raw search box text.
    pub search: String,
}

impl ShopQuery {
    /// Restores every control to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets the color filter from a select-option value; [`ALL_COLORS`] clears it.
    pub fn set_color_token(&mut self, token: &str) {
        self.color = if token == ALL_COLORS || token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
    }

    /// Select-option value for the current color filter.
    pub fn color_token(&self) -> &str {
        self.color.as_deref().unwrap_or(ALL_COLORS)
    }

    fn matches(&self, product: &Product, needle: &str) -> bool {
        if let Some(color) = &self.color {
            if product.color.to_lowercase() != color.to_lowercase() {
                return false;
            }
        }
        if needle.is_empty() {
            return true;
        }
        product.color.to_lowercase().contains(needle)
            || product
                .notes
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
    }
}

/// Applies `query` to `catalog`, returning the products to display in order.
pub fn visible_products(catalog: Vec<Product>, query: &ShopQuery) -> Vec<Product> {
    let needle = query.search.trim().to_lowercase();
    let mut list: Vec<Product> = catalog
        .into_iter()
        .filter(|p| query.matches(p, &needle))
        .collect();
    match query.sort {
        SortMode::None => {}
        SortMode::PriceAscending => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDescending => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    list
}

/// Distinct trimmed, non-empty colors in the catalog, sorted.
pub fn color_options(catalog: &[Product]) -> Vec<String> {
    catalog
        .iter()
        .map(|p| p.color.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
