//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory engine**. The terminal client shipped with it is
//! one rendering surface among many; a web page or a TUI could drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints views, owns exit codes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Load the collection, run one intent, persist, compose    │
//! │  - Return structured `CmdResult`s, never print              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (session, filter, selection, gateway, view)           │
//! │  - Pure, synchronous, in-memory                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core
//!
//! An [`session::InventorySession`] owns one product collection, the current
//! [`filter::FilterCriteria`], the [`selection::SelectionState`] and the create-form flag.
//! User intents flow in, [`session::SessionEvent`]s flow out:
//!
//! 1. A criteria change or a [`gateway::add`] produces a new collection snapshot.
//! 2. [`filter::visible`] derives the ordered visible subset.
//! 3. The selection is reconciled against the full collection, by id only.
//! 4. [`view::InventoryView::compose`] assembles what a renderer needs.
//!
//! Nothing in the core performs I/O. The gateway is the only code that produces a new
//! collection; the engine and the selection only read it.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by UI clients
//! - [`commands`]: one module per operation, over a [`store::DataStore`]
//! - [`model`]: `Product`, `ProductStatus`, `ProductDraft`
//! - [`filter`]: filter criteria and the visible-list engine
//! - [`selection`]: active product tracking
//! - [`gateway`]: product creation and validation
//! - [`session`]: page-level state machine over intents
//! - [`view`]: rendering-agnostic view model
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration file handling
//! - [`init`]: store location discovery
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod init;
pub mod model;
pub mod selection;
mod serde_helpers;
pub mod session;
pub mod store;
pub mod view;
