//! Router assembly

use crate::handler::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the HTTP router over a shared queue service
///
/// Playback clients are browser pages served from elsewhere, so CORS is
/// fully open.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/{queue_id}", get(handler::list))
        .route("/{queue_id}/current", get(handler::current))
        .route("/{queue_id}/next", get(handler::next))
        .route("/{queue_id}/pop", post(handler::pop))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
