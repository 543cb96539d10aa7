//! MediaQ SDK - Rust Client Library
//!
//! Read and pop a chat's media queue from a player.
//!
//! # Example
//!
//! ```no_run
//! use mediaq_sdk::MediaqClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MediaqClient::connect("http://127.0.0.1:5000")?;
//!     let queue = "Ada Grace Hopper-Lovelace";
//!
//!     // Play whatever is at the head, then consume it
//!     if let Some(entry) = client.current(queue).await? {
//!         println!("Now playing: {}", entry.url);
//!         client.pop(queue, &entry.id).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::MediaqClient;
pub use error::{Result, SdkError};
pub use types::QueueEntry;
