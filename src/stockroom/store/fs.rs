use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::Product;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "products.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StockError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        let path = self.data_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(StockError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;

        let mut seen = HashSet::with_capacity(products.len());
        if let Some(dup) = products.iter().find(|p| !seen.insert(p.id)) {
            return Err(StockError::Store(format!(
                "Duplicate product id {} in {}",
                dup.id,
                path.display()
            )));
        }

        tracing::debug!(count = products.len(), path = %path.display(), "loaded products");
        Ok(products)
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_path();
        let content = serde_json::to_string_pretty(products).map_err(StockError::Serialization)?;
        fs::write(&path, content).map_err(StockError::Io)?;
        tracing::debug!(count = products.len(), path = %path.display(), "saved products");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.data_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, ProductStatus};
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_an_empty_collection() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nowhere"));
        assert!(store.load_products().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join(".stockroom"));
        let products = vec![
            Product::new(ProductId(5), "Five", "F5").with_status(ProductStatus::InStock),
            Product::new(ProductId(2), "Two", "T2").with_price(3.5),
            Product::new(ProductId(9), "Nine", "N9"),
        ];

        store.save_products(&products).unwrap();
        let loaded = store.load_products().unwrap();

        assert_eq!(loaded, products);
        assert!(store.data_path().exists());
    }

    #[test]
    fn custom_data_file_name() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf()).with_data_file("catalog.json");
        store
            .save_products(&[Product::new(ProductId(1), "A", "A1")])
            .unwrap();
        assert!(temp.path().join("catalog.json").exists());
        assert_eq!(store.location(), Some(temp.path().join("catalog.json")));
    }

    #[test]
    fn loads_hand_written_partial_records() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_DATA_FILE),
            r#"[{"id": 1, "name": "Widget", "price": 10}, {"id": 2}]"#,
        )
        .unwrap();

        let store = FileStore::new(temp.path().to_path_buf());
        let loaded = store.load_products().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].price, Some(10.0));
        assert_eq!(loaded[1].name, "");
    }

    #[test]
    fn null_and_mistyped_fields_do_not_fail_the_load() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_DATA_FILE),
            r#"[{"id": 1, "category": null, "stock": -1, "price": "x"},
                {"id": 2, "name": "Widget", "stock": 2.5, "price": "12"}]"#,
        )
        .unwrap();

        let store = FileStore::new(temp.path().to_path_buf());
        let loaded = store.load_products().unwrap();

        assert_eq!(loaded[0].category, "");
        assert_eq!(loaded[0].stock, 0);
        assert_eq!(loaded[0].price, None);
        assert_eq!(loaded[1].stock, 2);
        assert_eq!(loaded[1].price, Some(12.0));
    }

    #[test]
    fn duplicate_ids_are_refused() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_DATA_FILE),
            r#"[{"id": 1}, {"id": 1}]"#,
        )
        .unwrap();

        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(store.load_products(), Err(StockError::Store(_))));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_DATA_FILE), "{not json").unwrap();

        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.load_products(),
            Err(StockError::Serialization(_))
        ));
    }
}
