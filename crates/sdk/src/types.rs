//! SDK Request/Response Types
//!
//! Mirrors the JSON shapes served by the HTTP API.

use serde::{Deserialize, Serialize};

/// One queued URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PopRequest<'a> {
    pub id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PopResponse {
    pub popped: QueueEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
