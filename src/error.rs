//! Error types for the fallible edges of the viewer (config, key parsing).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid cell key: {0:?}")]
    InvalidCellKey(String),
}
