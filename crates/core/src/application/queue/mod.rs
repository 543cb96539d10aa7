// Queue Service - Core use cases for per-chat media queues

pub mod enqueue;
pub mod pop;
pub mod read;

use crate::domain::{EntryId, QueueEntry, QueueId};
use crate::error::Result;
use crate::port::{IdProvider, QueueStore};
use std::sync::Arc;

/// Queue Service
///
/// Stateless facade over the use cases; all state lives in the injected store.
pub struct QueueService {
    store: Arc<dyn QueueStore>,
    id_provider: Arc<dyn IdProvider>,
}

impl QueueService {
    pub fn new(store: Arc<dyn QueueStore>, id_provider: Arc<dyn IdProvider>) -> Self {
        Self { store, id_provider }
    }

    /// Append a URL to the tail of `queue_id`
    pub async fn enqueue(
        &self,
        queue_id: &QueueId,
        candidate_url: Option<&str>,
    ) -> Result<EntryId> {
        enqueue::execute(
            self.store.as_ref(),
            self.id_provider.as_ref(),
            queue_id,
            candidate_url,
        )
        .await
    }

    pub async fn current(&self, queue_id: &QueueId) -> Result<Option<QueueEntry>> {
        read::current(self.store.as_ref(), queue_id).await
    }

    pub async fn next(&self, queue_id: &QueueId) -> Result<Option<QueueEntry>> {
        read::next(self.store.as_ref(), queue_id).await
    }

    pub async fn list(&self, queue_id: &QueueId) -> Result<Vec<QueueEntry>> {
        read::list(self.store.as_ref(), queue_id).await
    }

    /// Remove the head entry if its id is `requested_id`
    pub async fn pop(&self, queue_id: &QueueId, requested_id: &str) -> Result<QueueEntry> {
        pop::execute(self.store.as_ref(), queue_id, requested_id).await
    }

    /// Wipe every queue in the backing store
    pub async fn reset_store(&self) -> Result<()> {
        self.store.clear_all().await
    }
}
