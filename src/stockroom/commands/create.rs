use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::ProductDraft;
use crate::session::{Intent, InventorySession};
use crate::store::DataStore;
use crate::view::InventoryView;

/// Adds a product and persists the collection. A rejected draft leaves the store untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    config: &StockConfig,
    draft: ProductDraft,
) -> Result<CmdResult> {
    let products = store.load_products()?;
    let mut session = InventorySession::new(products).with_default_sort(config.default_sort);

    session.apply(Intent::OpenCreateForm)?;
    let (product, _events) = session.create(&draft)?;
    store.save_products(session.products())?;

    tracing::info!(id = %product.id, sku = %product.sku, "product created");

    let view = InventoryView::compose(&session);
    let mut result = CmdResult::default()
        .with_view(view)
        .with_affected_products(vec![product.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Added {} ({}) as #{}",
        product.name, product.sku, product.id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::gateway::{CreateError, DraftField};
    use crate::model::{ProductId, ProductStatus};
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn persists_new_product_in_front_and_selects_it() {
        let mut fixture = StoreFixture::new().with_products(2);
        let mut draft = ProductDraft::new("Sprocket", "SPR-1");
        draft.price = "4.25".into();

        let result = run(&mut fixture.store, &StockConfig::default(), draft).unwrap();

        let stored = fixture.store.load_products().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].name, "Sprocket");
        assert!(stored[0].id > ProductId(2));

        let view = result.view.unwrap();
        assert_eq!(view.detail.product().map(|p| p.id), Some(stored[0].id));
        assert!(!view.create_form_open);
        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn rejected_draft_is_not_persisted() {
        let mut fixture = StoreFixture::new().with_products(1);
        let draft = ProductDraft::new("Sprocket", " ");

        let err = run(&mut fixture.store, &StockConfig::default(), draft).unwrap_err();

        assert!(matches!(
            err,
            StockError::Rejected(CreateError::MissingField(DraftField::Sku))
        ));
        assert_eq!(fixture.store.load_products().unwrap().len(), 1);
    }

    #[test]
    fn stored_status_text_survives_an_add() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("products.json"),
            r#"[{"id": 1, "name": "Lamp", "sku": "L1", "status": "Discontinued"}]"#,
        )
        .unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        run(&mut store, &StockConfig::default(), ProductDraft::new("Desk", "D1")).unwrap();

        let stored = store.load_products().unwrap();
        let lamp = stored.iter().find(|p| p.id == ProductId(1)).unwrap();
        assert_eq!(lamp.status, ProductStatus::Other("Discontinued".into()));

        let raw = std::fs::read_to_string(store.data_path()).unwrap();
        assert!(raw.contains("\"status\": \"Discontinued\""));
    }
}
