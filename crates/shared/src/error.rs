//! Error types for innkeep storage

use std::path::PathBuf;
use thiserror::Error;

/// Error raised when a collection file can not be written
#[derive(Debug, Error)]
#[error("Failed to write '{}': {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// General store error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
