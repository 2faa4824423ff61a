//! Tracks which product is active in the detail panel.
//!
//! The selection is held as a [`ProductId`] and resolved against the current collection on
//! every read, so replacing the collection wholesale never leaves a stale reference behind.
//! Membership is checked against the *full* collection: a product hidden by the current
//! filters stays selected.

use crate::error::{Result, StockError};
use crate::model::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    active: Option<ProductId>,
}

impl SelectionState {
    /// Initial selection: the first element of the full collection, if any.
    pub fn initialize(products: &[Product]) -> Self {
        Self {
            active: products.first().map(|p| p.id),
        }
    }

    pub fn active(&self) -> Option<ProductId> {
        self.active
    }

    /// Selects `id`, refusing ids that are not in the collection.
    pub fn select(&mut self, id: ProductId, products: &[Product]) -> Result<()> {
        if !contains(products, id) {
            return Err(StockError::ProductNotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Decides the selection after the collection changed.
    ///
    /// A freshly created product always wins. Otherwise the previous selection is kept
    /// while it still exists, and dropped when it does not. There is no fallback to the
    /// list head here; that only happens in [`SelectionState::initialize`].
    pub fn reconcile(&mut self, products: &[Product], created: Option<ProductId>) {
        self.active = match created {
            Some(id) => Some(id),
            None => self.active.filter(|id| contains(products, *id)),
        };
    }

    /// The selected product, looked up by id in `products`.
    pub fn resolve<'a>(&self, products: &'a [Product]) -> Option<&'a Product> {
        let id = self.active?;
        products.iter().find(|p| p.id == id)
    }
}

fn contains(products: &[Product], id: ProductId) -> bool {
    products.iter().any(|p| p.id == id)
}
