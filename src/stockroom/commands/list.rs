use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockConfig;
use crate::error::Result;
use crate::filter::{FieldFilter, FilterCriteria, SortMode};
use crate::model::{ProductId, ProductStatus};
use crate::session::InventorySession;
use crate::store::DataStore;
use crate::view::InventoryView;

/// What the user asked to see. `sort: None` falls back to the configured default.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub sort: Option<SortMode>,
    pub category: FieldFilter<String>,
    pub status: FieldFilter<ProductStatus>,
    pub select: Option<ProductId>,
}

impl ListQuery {
    pub fn criteria(&self, config: &StockConfig) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            sort: self.sort.unwrap_or(config.default_sort),
            category: self.category.clone(),
            status: self.status.clone(),
        }
    }
}

pub fn run<S: DataStore>(store: &S, config: &StockConfig, query: ListQuery) -> Result<CmdResult> {
    let products = store.load_products()?;
    let mut session = InventorySession::new(products).with_default_sort(config.default_sort);

    session.change_filter(query.criteria(config));
    if let Some(id) = query.select {
        session.select(id)?;
    }

    let view = InventoryView::compose(&session);
    let mut result = CmdResult::default();
    if view.total > 0 && view.shown == 0 {
        result.add_message(CmdMessage::info(format!(
            "No products match the current filters ({} hidden).",
            view.total
        )));
    }
    if let Some(id) = query.select {
        if !view.cards.iter().any(|card| card.id == id) {
            result.add_message(CmdMessage::warning(format!(
                "Product #{} is selected but hidden by the current filters.",
                id
            )));
        }
    }
    Ok(result.with_view(view))
}
