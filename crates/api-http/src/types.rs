//! HTTP Request/Response Types

use mediaq_core::domain::QueueEntry;
use serde::{Deserialize, Serialize};

/// Single-entry read result; serializes as the entry or as `{}`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EntryResponse {
    Entry(QueueEntry),
    Empty(EmptyObject),
}

#[derive(Debug, Serialize)]
pub struct EmptyObject {}

impl From<Option<QueueEntry>> for EntryResponse {
    fn from(entry: Option<QueueEntry>) -> Self {
        match entry {
            Some(entry) => EntryResponse::Entry(entry),
            None => EntryResponse::Empty(EmptyObject {}),
        }
    }
}

/// POST /{queue_id}/pop
///
/// `id` is kept as raw JSON: a number, `null` or a missing key is not an
/// error of its own, it just never names a queued entry.
#[derive(Debug, Default, Deserialize)]
pub struct PopRequest {
    #[serde(default)]
    pub id: serde_json::Value,
}

impl PopRequest {
    /// Lenient body decoding; unparsable bodies become an empty request
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The requested id as text for the pop use case
    ///
    /// Strings pass through; other JSON values keep their literal form, which
    /// can never parse as an entry id.
    pub fn requested_id(&self) -> String {
        match &self.id {
            serde_json::Value::String(id) => id.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PopResponse {
    pub popped: QueueEntry,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
