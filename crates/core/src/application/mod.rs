// Application Layer - Use Cases and Business Logic

pub mod identity;
pub mod queue;
pub mod shutdown;

// Re-exports
pub use identity::IdentityDeriver;
pub use queue::QueueService;
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
