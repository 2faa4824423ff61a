//! # View Composition
//!
//! Everything a renderer needs to draw the inventory page, derived from a session:
//! filter controls, the product grid, the detail panel and the create-form flag.
//! The structures are plain data (and serializable), so any front end can consume them
//! without knowing about sessions or stores.

use crate::filter::{category_options, SortMode};
use crate::gateway::IdSource;
use crate::model::{Product, ProductId, ProductStatus};
use crate::session::InventorySession;
use serde::Serialize;

/// Visual severity of a product card, from its capacity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CapacityTier {
    Normal,
    Warning,
    Critical,
}

impl CapacityTier {
    pub const WARNING_AT: f64 = 70.0;
    pub const CRITICAL_AT: f64 = 90.0;

    pub fn for_capacity(percent: f64) -> Self {
        if percent >= Self::CRITICAL_AT {
            CapacityTier::Critical
        } else if percent >= Self::WARNING_AT {
            CapacityTier::Warning
        } else {
            CapacityTier::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterControls {
    pub search: String,
    pub sort: SortMode,
    pub category: String,
    pub status: String,
    pub category_options: Vec<String>,
    pub is_filtered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Option<f64>,
    pub stock: u32,
    pub status: ProductStatus,
    pub capacity: f64,
    pub tier: CapacityTier,
    pub selected: bool,
}

impl ProductCard {
    fn from_product(product: &Product, selected: Option<ProductId>) -> Self {
        let capacity = product.capacity_percent();
        Self {
            id: product.id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            price: product.price,
            stock: product.stock,
            status: product.status.clone(),
            capacity,
            tier: CapacityTier::for_capacity(capacity),
            selected: selected == Some(product.id),
        }
    }
}

/// Right-hand panel: the selected product, or a placeholder when nothing is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "product", rename_all = "camelCase")]
pub enum DetailPanel {
    Product(Box<Product>),
    Placeholder,
}

impl DetailPanel {
    pub fn product(&self) -> Option<&Product> {
        match self {
            DetailPanel::Product(p) => Some(p.as_ref()),
            DetailPanel::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub controls: FilterControls,
    pub cards: Vec<ProductCard>,
    pub detail: DetailPanel,
    pub create_form_open: bool,
    pub total: usize,
    pub shown: usize,
}

impl InventoryView {
    pub fn compose<I: IdSource>(session: &InventorySession<I>) -> Self {
        let criteria = session.criteria();
        let active = session.selection().active();

        let cards: Vec<ProductCard> = session
            .visible()
            .into_iter()
            .map(|p| ProductCard::from_product(p, active))
            .collect();

        let detail = match session.selected() {
            Some(product) => DetailPanel::Product(Box::new(product.clone())),
            None => DetailPanel::Placeholder,
        };

        Self {
            controls: FilterControls {
                search: criteria.search.clone(),
                sort: criteria.sort,
                category: criteria.category.label(),
                status: criteria.status.label(),
                category_options: category_options(session.products()),
                is_filtered: !criteria.is_unfiltered(),
            },
            shown: cards.len(),
            total: session.products().len(),
            cards,
            detail,
            create_form_open: session.is_create_form_open(),
        }
    }
}
