// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No URL provided")]
    MissingUrl,

    #[error("Not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("Queue is empty: {0}")]
    HeadEmpty(String),

    #[error("Entry {entry_id} not found in queue {queue_id}")]
    EntryNotFound { queue_id: String, entry_id: String },

    #[error("Entry {entry_id} is queued but not at the head of {queue_id}")]
    EntryNotAtHead { queue_id: String, entry_id: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
