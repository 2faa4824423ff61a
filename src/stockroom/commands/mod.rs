//! # Command Layer
//!
//! One module per operation. Each `run` loads the collection from a [`DataStore`],
//! drives an [`InventorySession`](crate::session::InventorySession) through the intents
//! the operation needs, persists if the collection changed, and returns a [`CmdResult`].
//!
//! Commands never print. Anything meant for the user goes into [`CmdResult::messages`].
//!
//! [`DataStore`]: crate::store::DataStore

use crate::config::StockConfig;
use crate::model::Product;
use crate::view::InventoryView;
use serde::Serialize;

pub mod categories;
pub mod config;
pub mod create;
pub mod init;
pub mod list;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Number of products carrying a given category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub view: Option<InventoryView>,
    pub affected_products: Vec<Product>,
    pub categories: Vec<CategorySummary>,
    pub config: Option<StockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: InventoryView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategorySummary>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }
}
