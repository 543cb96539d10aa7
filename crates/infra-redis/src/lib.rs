//! Redis adapter for MediaQ.
//!
//! Each queue is one Redis list keyed by the queue id; payloads are the JSON
//! encoded entries, so lists written by earlier deployments stay readable.

mod error;
mod queue_store;

pub use error::map_redis_error;
pub use queue_store::RedisQueueStore;
