// Read Use Cases (side-effect free)
//
// Unknown queue ids read exactly like empty queues.

use crate::domain::{QueueEntry, QueueId, READ_WINDOW};
use crate::error::Result;
use crate::port::QueueStore;

/// Entry at `index`, if any
async fn at(
    store: &dyn QueueStore,
    queue_id: &QueueId,
    index: usize,
) -> Result<Option<QueueEntry>> {
    store
        .peek(queue_id, index)
        .await?
        .map(|payload| QueueEntry::decode(&payload))
        .transpose()
}

/// Head of the queue (index 0)
pub async fn current(store: &dyn QueueStore, queue_id: &QueueId) -> Result<Option<QueueEntry>> {
    at(store, queue_id, 0).await
}

/// Second entry (index 1)
///
/// Purely positional: if the queue changed since a previous `current` read,
/// this is not necessarily that entry's successor.
pub async fn next(store: &dyn QueueStore, queue_id: &QueueId) -> Result<Option<QueueEntry>> {
    at(store, queue_id, 1).await
}

/// First `READ_WINDOW` entries in queue order
pub async fn list(store: &dyn QueueStore, queue_id: &QueueId) -> Result<Vec<QueueEntry>> {
    store
        .range(queue_id, 0, READ_WINDOW)
        .await?
        .iter()
        .map(|payload| QueueEntry::decode(payload))
        .collect()
}
