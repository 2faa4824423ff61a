use crate::commands::CmdResult;
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::ProductId;
use crate::session::InventorySession;
use crate::store::DataStore;
use crate::view::InventoryView;

pub fn run<S: DataStore>(store: &S, config: &StockConfig, id: ProductId) -> Result<CmdResult> {
    let products = store.load_products()?;
    let mut session = InventorySession::new(products).with_default_sort(config.default_sort);
    session.select(id)?;

    let affected = session.selected().cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_view(InventoryView::compose(&session))
        .with_affected_products(affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_requested_product() {
        let fixture = StoreFixture::new().with_products(3);
        let result = run(&fixture.store, &StockConfig::default(), ProductId(2)).unwrap();
        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(result.affected_products[0].id, ProductId(2));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new().with_products(1);
        let err = run(&fixture.store, &StockConfig::default(), ProductId(77)).unwrap_err();
        assert!(matches!(err, StockError::ProductNotFound(ProductId(77))));
    }
}
