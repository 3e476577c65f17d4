

use thiserror::Error;


#[derive(Error, Debug)]
pub enum CinematchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CinematchError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}


pub type Result<T> = std::result::Result<T, CinematchError>;


/// Checks a caller-supplied result count. Negative counts are a contract
/// violation and are reported, never clamped.
pub fn validate_limit(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| {
        CinematchError::validation(format!("result count must be non-negative, got {n}"))
    })
}
