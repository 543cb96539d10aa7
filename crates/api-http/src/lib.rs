//! HTTP API Layer
//!
//! Read and pop endpoints for playback clients:
//!
//! ```text
//! GET  /{queue_id}          first 11 entries
//! GET  /{queue_id}/current  head entry or {}
//! GET  /{queue_id}/next     second entry or {}
//! POST /{queue_id}/pop      {"id": "..."} -> {"popped": entry}
//! ```

pub mod error;
pub mod handler;
pub mod routes;
pub mod server;
pub mod types;

pub use routes::create_router;
pub use server::{HttpServer, HttpServerConfig};
