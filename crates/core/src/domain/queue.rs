// Queue Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of entries returned by a list read (indices 0..=10).
///
/// Queues longer than this are truncated in the response; there is no
/// pagination.
pub const READ_WINDOW: usize = 11;

/// Number of entries inspected when validating a pop request (indices 0..=100).
///
/// Entries beyond this prefix are invisible to pop diagnostics: naming one of
/// them yields "not found" even though it is still queued.
pub const POP_SCAN_WINDOW: usize = 101;

/// Pseudonymous queue identifier derived from a chat id.
///
/// The id is the backing store key itself and is never persisted as a
/// separate record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(String);

impl QueueId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for QueueId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for QueueId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for QueueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
