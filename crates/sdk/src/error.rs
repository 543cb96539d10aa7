//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    /// Pop on an empty queue (404)
    #[error("Queue is empty: {0}")]
    QueueEmpty(String),

    /// Pop of an id the server could not find near the head (400)
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Pop of an id that is queued but not at the head (409)
    #[error("Entry is not at the head: {0}")]
    EntryNotAtHead(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
