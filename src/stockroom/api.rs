//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI clients.
//! It dispatches to `commands::*::run`, passing along the store and configuration it
//! owns, and returns `Result<CmdResult>`. No business logic and no printing here.
//!
//! `StockroomApi<S: DataStore>` is generic over the backend: `FileStore` in the binary,
//! `InMemoryStore` in tests.

use crate::commands;
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::{ProductDraft, ProductId};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct StockroomApi<S: DataStore> {
    store: S,
    dir: PathBuf,
    config: StockConfig,
}

impl<S: DataStore> StockroomApi<S> {
    pub fn new(store: S, dir: PathBuf, config: StockConfig) -> Self {
        Self { store, dir, config }
    }

    pub fn list(&self, query: ListQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.config, query)
    }

    pub fn create(&mut self, draft: ProductDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &self.config, draft)
    }

    pub fn show(&self, id: ProductId) -> Result<CmdResult> {
        commands::show::run(&self.store, &self.config, id)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::categories::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.dir, action)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.dir)
    }

    pub fn settings(&self) -> &StockConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListQuery;
pub use crate::commands::{CategorySummary, CmdMessage, CmdResult, MessageLevel};
