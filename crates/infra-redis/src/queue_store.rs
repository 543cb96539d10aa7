// Redis QueueStore Implementation

use crate::error::map_redis_error;
use async_trait::async_trait;
use mediaq_core::domain::QueueId;
use mediaq_core::error::Result;
use mediaq_core::port::QueueStore;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Script};
use tracing::{info, warn};

/// Remove the head only if it is byte-for-byte the expected payload.
/// Runs server-side, so the check and the LPOP are atomic.
const POP_HEAD_IF_SCRIPT: &str = r#"
if redis.call('LINDEX', KEYS[1], 0) == ARGV[1] then
    redis.call('LPOP', KEYS[1])
    return 1
end
return 0
"#;

pub struct RedisQueueStore {
    conn: ConnectionManager,
    pop_head_if: Script,
}

impl RedisQueueStore {
    /// Connect to `url` (e.g. `redis://127.0.0.1:6379/0`)
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;

        info!("Connected to Redis");

        Ok(Self {
            conn,
            pop_head_if: Script::new(POP_HEAD_IF_SCRIPT),
        })
    }
}

fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

#[async_trait]
impl QueueStore for RedisQueueStore {
    async fn push_tail(&self, key: &QueueId, payload: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _len: i64 = conn
            .rpush(key.as_str(), payload)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn range(&self, key: &QueueId, start: usize, len: usize) -> Result<Vec<String>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        // LRANGE bounds are inclusive
        let stop = to_isize(start).saturating_add(to_isize(len) - 1);

        let mut conn = self.conn.clone();
        let payloads: Vec<String> = conn
            .lrange(key.as_str(), to_isize(start), stop)
            .await
            .map_err(map_redis_error)?;
        Ok(payloads)
    }

    async fn peek(&self, key: &QueueId, index: usize) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn
            .lindex(key.as_str(), to_isize(index))
            .await
            .map_err(map_redis_error)?;
        Ok(payload)
    }

    async fn pop_head(&self, key: &QueueId) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn
            .lpop(key.as_str(), None)
            .await
            .map_err(map_redis_error)?;
        Ok(payload)
    }

    async fn pop_head_if(&self, key: &QueueId, expected: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = self
            .pop_head_if
            .key(key.as_str())
            .arg(expected)
            .invoke_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(removed == 1)
    }

    async fn clear_all(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;

        warn!("Flushed Redis database");
        Ok(())
    }
}
