// Queue Entry Domain Model

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Entry ID (UUID v4), generated once at enqueue time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse a caller-supplied id. Returns `None` for anything that is not a UUID.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single queued media URL.
///
/// Stored in the backing list as the JSON object `{"id": "...", "url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: EntryId,
    pub url: String,
}

impl QueueEntry {
    pub fn new(id: EntryId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }

    /// Serialize into the stored payload format
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored payload
    ///
    /// Malformed payloads are reported as [`AppError::Decode`] so callers can
    /// tell corrupt store contents apart from other failures.
    pub fn decode(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|source| AppError::Decode {
            payload: payload.to_string(),
            source,
        })
    }
}
