//! HTTP Handlers
//!
//! Thin adapters: extract path/body, call the queue service, wrap the result.

use crate::error::ApiError;
use crate::types::{EntryResponse, PopRequest, PopResponse};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use mediaq_core::application::QueueService;
use mediaq_core::domain::{QueueEntry, QueueId};
use std::sync::Arc;

pub type AppState = Arc<QueueService>;

/// GET /{queue_id}
pub async fn list(
    State(service): State<AppState>,
    Path(queue_id): Path<String>,
) -> Result<Json<Vec<QueueEntry>>, ApiError> {
    let entries = service.list(&QueueId::new(queue_id)).await?;
    Ok(Json(entries))
}

/// GET /{queue_id}/current
pub async fn current(
    State(service): State<AppState>,
    Path(queue_id): Path<String>,
) -> Result<Json<EntryResponse>, ApiError> {
    let entry = service.current(&QueueId::new(queue_id)).await?;
    Ok(Json(entry.into()))
}

/// GET /{queue_id}/next
pub async fn next(
    State(service): State<AppState>,
    Path(queue_id): Path<String>,
) -> Result<Json<EntryResponse>, ApiError> {
    let entry = service.next(&QueueId::new(queue_id)).await?;
    Ok(Json(entry.into()))
}

/// POST /{queue_id}/pop
///
/// The body is decoded by hand: a malformed or non-string id must still get
/// the empty-queue (404) and not-found (400) answers, not an extractor
/// rejection.
pub async fn pop(
    State(service): State<AppState>,
    Path(queue_id): Path<String>,
    body: Bytes,
) -> Result<Json<PopResponse>, ApiError> {
    let req = PopRequest::from_body(&body);
    let popped = service
        .pop(&QueueId::new(queue_id), &req.requested_id())
        .await?;
    Ok(Json(PopResponse { popped }))
}
