//! Error types for the component logic.

use kiji_traits::IndexError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KijiError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Search index error: {0}")]
    Index(#[from] IndexError),
    #[error("Invalid query pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
