use crate::gateway::CreateError;
use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Product rejected: {0}")]
    Rejected(#[from] CreateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
