//! # Filter/Sort Engine
//!
//! [`visible`] maps a product collection and a [`FilterCriteria`] to the ordered subset a
//! view should show. It is a pure function: the input slice is only borrowed, the result
//! is a fresh vector of references, and the same inputs always give the same output.
//!
//! ## Pipeline
//!
//! Each stage is a pass-through when its criterion is at the default.
//!
//! 1. **Text**: case-insensitive substring match on name, sku or category.
//! 2. **Category**: exact, case-sensitive equality.
//! 3. **Status**: exact equality.
//! 4. **Sort** (stable):
//!    - `Newest`: descending id (ids grow with creation time)
//!    - `Oldest`: no reordering, the collection order is kept as is
//!    - `PriceHigh` / `PriceLow`: by [`Product::price_or_zero`]
//!
//! Missing fields are never errors. An empty name or category simply does not
//! match a non-empty search, and a missing price sorts as zero.

use crate::model::{Product, ProductStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Newest,
            SortMode::Oldest,
            SortMode::PriceHigh,
            SortMode::PriceLow,
        ]
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::PriceHigh => "price-high",
            SortMode::PriceLow => "price-low",
        };
        f.write_str(s)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "pricehigh" => Ok(SortMode::PriceHigh),
            "pricelow" => Ok(SortMode::PriceLow),
            _ => Err(format!(
                "Invalid sort mode: {} (expected newest, oldest, price-high or price-low)",
                s
            )),
        }
    }
}

/// Either no restriction, or an exact value to match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> FieldFilter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FieldFilter::All)
    }
}

impl<T: fmt::Display> FieldFilter<T> {
    /// `"all"` or the expected value, as shown in filter controls.
    pub fn label(&self) -> String {
        match self {
            FieldFilter::All => "all".to_string(),
            FieldFilter::Only(value) => value.to_string(),
        }
    }
}

impl<T: FromStr> FromStr for FieldFilter<T> {
    type Err = T::Err;

    /// The literal `all` lifts the restriction; anything else must parse as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(FieldFilter::All);
        }
        s.parse().map(FieldFilter::Only)
    }
}

/// Ephemeral filter state for one view instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub sort: SortMode,
    pub category: FieldFilter<String>,
    pub status: FieldFilter<ProductStatus>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = FieldFilter::Only(category.into());
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = FieldFilter::Only(status);
        self
    }

    /// Resets search, category and status. The sort mode goes back to `default_sort`.
    pub fn clear(&mut self, default_sort: SortMode) {
        *self = Self {
            sort: default_sort,
            ..Self::default()
        };
    }

    /// True when no stage of the pipeline narrows the collection.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.category.is_all() && self.status.is_all()
    }

    fn matches_text(&self, needle: &str, product: &Product) -> bool {
        needle.is_empty()
            || [&product.name, &product.sku, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Computes the ordered visible subset of `products`.
pub fn visible<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let needle = criteria.search.to_lowercase();

    let mut listed: Vec<&Product> = products
        .iter()
        .filter(|p| criteria.matches_text(&needle, p))
        .filter(|p| criteria.category.accepts(&p.category))
        .filter(|p| criteria.status.accepts(&p.status))
        .collect();

    match criteria.sort {
        SortMode::Newest => listed.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Oldest => {}
        SortMode::PriceHigh => {
            listed.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()))
        }
        SortMode::PriceLow => {
            listed.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()))
        }
    }

    listed
}

/// Distinct non-empty categories, in first-seen order.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !product.category.is_empty() && !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
