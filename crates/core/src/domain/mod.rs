// Domain Layer - Pure business logic and entities

pub mod entry;
pub mod error;
pub mod queue;

// Re-exports
pub use entry::{EntryId, QueueEntry};
pub use error::DomainError;
pub use queue::{QueueId, POP_SCAN_WINDOW, READ_WINDOW};
