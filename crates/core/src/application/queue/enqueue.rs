// Enqueue Use Case

use crate::domain::{DomainError, EntryId, QueueEntry, QueueId};
use crate::error::Result;
use crate::port::{IdProvider, QueueStore};
use tracing::info;
use url::Url;

/// Check a candidate URL
///
/// Valid iff it parses with a non-empty scheme and a non-empty host.
/// `None` and whitespace-only input are reported as a missing URL, which is
/// a different error from a present-but-invalid one.
pub fn validate_url(candidate: Option<&str>) -> std::result::Result<&str, DomainError> {
    let candidate = match candidate.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(DomainError::MissingUrl),
    };

    let parsed = Url::parse(candidate).map_err(|_| DomainError::InvalidUrl(candidate.into()))?;
    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    if parsed.scheme().is_empty() || !has_host {
        return Err(DomainError::InvalidUrl(candidate.into()));
    }

    Ok(candidate)
}

/// Execute enqueue use case
///
/// # Arguments
///
/// * `store` - Queue store
/// * `id_provider` - ID generator (injected for determinism)
/// * `queue_id` - Target queue
/// * `candidate_url` - URL as supplied by the user, if any
pub async fn execute(
    store: &dyn QueueStore,
    id_provider: &dyn IdProvider,
    queue_id: &QueueId,
    candidate_url: Option<&str>,
) -> Result<EntryId> {
    let url = validate_url(candidate_url)?;

    let entry = QueueEntry::new(id_provider.generate_id(), url);
    store.push_tail(queue_id, &entry.encode()?).await?;

    info!(url = %entry.url, queue_id = %queue_id, entry_id = %entry.id, "Enqueued URL");

    Ok(entry.id)
}
