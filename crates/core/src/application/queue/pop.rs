// Pop Use Case
//
// A pop succeeds only when the requested id is the current head. Removal goes
// through the store's compare-and-pop, so a stale request can never remove an
// entry other than the one it named.

use crate::domain::{DomainError, EntryId, QueueEntry, QueueId, POP_SCAN_WINDOW};
use crate::error::Result;
use crate::port::QueueStore;
use tracing::{debug, info};

/// Execute pop use case
///
/// # Errors
///
/// * `HeadEmpty` - the queue has no entries
/// * `EntryNotAtHead` - the id is within the scan window but not at index 0
/// * `EntryNotFound` - the id is not within the scan window, is not a valid
///   entry id, or was removed by a concurrent pop
pub async fn execute(
    store: &dyn QueueStore,
    queue_id: &QueueId,
    requested_id: &str,
) -> Result<QueueEntry> {
    let head_payload = store
        .peek(queue_id, 0)
        .await?
        .ok_or_else(|| DomainError::HeadEmpty(queue_id.to_string()))?;

    let not_found = || DomainError::EntryNotFound {
        queue_id: queue_id.to_string(),
        entry_id: requested_id.to_string(),
    };

    let Some(requested) = EntryId::parse(requested_id) else {
        return Err(not_found().into());
    };

    let head = QueueEntry::decode(&head_payload)?;
    if head.id == requested {
        if store.pop_head_if(queue_id, &head_payload).await? {
            info!(queue_id = %queue_id, entry_id = %head.id, url = %head.url, "Popped entry");
            return Ok(head);
        }
        // Head changed between peek and removal
        debug!(queue_id = %queue_id, entry_id = %requested, "Lost pop race");
        return Err(not_found().into());
    }

    for payload in store.range(queue_id, 0, POP_SCAN_WINDOW).await? {
        if QueueEntry::decode(&payload)?.id == requested {
            return Err(DomainError::EntryNotAtHead {
                queue_id: queue_id.to_string(),
                entry_id: requested_id.to_string(),
            }
            .into());
        }
    }

    Err(not_found().into())
}
