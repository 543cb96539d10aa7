// Queue Store Port (Interface)

use crate::domain::QueueId;
use crate::error::Result;
use async_trait::async_trait;

/// Ordered-list store keyed by queue id.
///
/// Payloads are opaque strings (encoded [`QueueEntry`](crate::domain::QueueEntry)
/// values). Every method is a single atomic operation against the backing
/// store; callers get no atomicity across calls.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Append a payload to the tail of the list
    async fn push_tail(&self, key: &QueueId, payload: &str) -> Result<()>;

    /// Read up to `len` payloads starting at index `start`, in list order
    async fn range(&self, key: &QueueId, start: usize, len: usize) -> Result<Vec<String>>;

    /// Read the payload at `index`, if any
    async fn peek(&self, key: &QueueId, index: usize) -> Result<Option<String>>;

    /// Remove and return the head payload
    async fn pop_head(&self, key: &QueueId) -> Result<Option<String>>;

    /// Remove the head payload only if it equals `expected`
    ///
    /// Returns `true` when an entry was removed. This is the compare-and-pop
    /// primitive the pop use case relies on.
    async fn pop_head_if(&self, key: &QueueId, expected: &str) -> Result<bool>;

    /// Wipe every queue (debug bootstrap only)
    async fn clear_all(&self) -> Result<()>;
}

/// In-process store, used as the `memory://` backend and as a test double
pub mod memory {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryQueueStore {
        lists: Mutex<HashMap<String, VecDeque<String>>>,
    }

    impl InMemoryQueueStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of payloads currently stored under `key`
        pub async fn len(&self, key: &QueueId) -> usize {
            self.lists
                .lock()
                .await
                .get(key.as_str())
                .map_or(0, VecDeque::len)
        }
    }

    #[async_trait]
    impl QueueStore for InMemoryQueueStore {
        async fn push_tail(&self, key: &QueueId, payload: &str) -> Result<()> {
            self.lists
                .lock()
                .await
                .entry(key.as_str().to_string())
                .or_default()
                .push_back(payload.to_string());
            Ok(())
        }

        async fn range(&self, key: &QueueId, start: usize, len: usize) -> Result<Vec<String>> {
            let lists = self.lists.lock().await;
            Ok(lists
                .get(key.as_str())
                .map(|list| list.iter().skip(start).take(len).cloned().collect())
                .unwrap_or_default())
        }

        async fn peek(&self, key: &QueueId, index: usize) -> Result<Option<String>> {
            let lists = self.lists.lock().await;
            Ok(lists
                .get(key.as_str())
                .and_then(|list| list.get(index).cloned()))
        }

        async fn pop_head(&self, key: &QueueId) -> Result<Option<String>> {
            let mut lists = self.lists.lock().await;
            let Some(list) = lists.get_mut(key.as_str()) else {
                return Ok(None);
            };
            let head = list.pop_front();
            // Redis deletes empty lists; mirror that
            if list.is_empty() {
                lists.remove(key.as_str());
            }
            Ok(head)
        }

        async fn pop_head_if(&self, key: &QueueId, expected: &str) -> Result<bool> {
            let mut lists = self.lists.lock().await;
            let Some(list) = lists.get_mut(key.as_str()) else {
                return Ok(false);
            };
            if list.front().map(String::as_str) != Some(expected) {
                return Ok(false);
            }
            list.pop_front();
            if list.is_empty() {
                lists.remove(key.as_str());
            }
            Ok(true)
        }

        async fn clear_all(&self) -> Result<()> {
            self.lists.lock().await.clear();
            Ok(())
        }
    }

}
