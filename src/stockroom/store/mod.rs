//! # Storage Layer
//!
//! The core works on an in-memory `Vec<Product>`; a [`DataStore`] is where that
//! collection comes from and where it goes after a mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the collection as a JSON array in a single file
//!   (`products.json` by default). Array order is preserved, which matters for the
//!   `oldest` sort.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! .stockroom/
//! ├── products.json   # JSON array of products, camelCase keys
//! └── config.json     # StockConfig
//! ```

use crate::error::Result;
use crate::model::Product;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for the product collection.
pub trait DataStore {
    /// Load the whole collection, in stored order. A store that was never written is empty.
    fn load_products(&self) -> Result<Vec<Product>>;

    /// Replace the stored collection with `products`.
    fn save_products(&mut self, products: &[Product]) -> Result<()>;

    /// Where the collection lives, for stores that have a location.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}
