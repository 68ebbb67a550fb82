use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid repository identifier '{0}', expected owner/name")]
    InvalidRepository(String),

    #[error("Invalid stage '{0}'. Valid stages: toDo, inProgress, done")]
    InvalidStage(String),

    #[cfg(feature = "github")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("Issue fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
