use super::DataStore;
use crate::error::Result;
use crate::model::Product;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ProductId, ProductStatus};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        fn push(&mut self, product: Product) {
            self.next_id = self.next_id.max(product.id.0.saturating_add(1));
            self.store.products.push(product);
        }

        /// Appends `count` generic products, ids ascending.
        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = ProductId(self.next_id);
                let product = Product::new(id, format!("Product {}", i + 1), format!("SKU-{}", id))
                    .with_category("General")
                    .with_price(10.0 * (i + 1) as f64)
                    .with_stock(5)
                    .with_status(ProductStatus::InStock);
                self.push(product);
            }
            self
        }

        pub fn with_product(mut self, product: Product) -> Self {
            self.push(product);
            self
        }

        pub fn with_out_of_stock(mut self, name: &str, category: &str) -> Self {
            let id = ProductId(self.next_id);
            let product = Product::new(id, name, format!("SKU-{}", id))
                .with_category(category)
                .with_status(ProductStatus::OutOfStock);
            self.push(product);
            self
        }
    }
}
