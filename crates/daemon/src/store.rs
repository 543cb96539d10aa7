// Store selection by URL scheme

use anyhow::{Context, Result};
use mediaq_core::port::{InMemoryQueueStore, QueueStore};
use mediaq_infra_redis::RedisQueueStore;
use mediaq_infra_sqlite::{create_pool, run_migrations, SqliteQueueStore};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum StoreTarget {
    Redis(String),
    /// sqlx connection URL
    Sqlite(String),
    Memory,
}

impl StoreTarget {
    pub fn parse(url: &str) -> Self {
        let url = url.trim();
        if url.starts_with("redis://") || url.starts_with("rediss://") {
            return StoreTarget::Redis(url.to_string());
        }
        if url.starts_with("memory://") {
            return StoreTarget::Memory;
        }

        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        if path.starts_with(":memory:") {
            StoreTarget::Sqlite(format!("sqlite:{path}"))
        } else {
            StoreTarget::Sqlite(format!("sqlite:{}", shellexpand::tilde(path)))
        }
    }
}

/// Open the configured backend, running migrations where it has any
pub async fn open_store(url: &str) -> Result<Arc<dyn QueueStore>> {
    match StoreTarget::parse(url) {
        StoreTarget::Redis(url) => {
            info!("Using Redis store");
            let store = RedisQueueStore::connect(&url)
                .await
                .context("Redis connection failed")?;
            Ok(Arc::new(store))
        }
        StoreTarget::Sqlite(url) => {
            info!(url = %url, "Using SQLite store");
            if let Some(parent) = url
                .strip_prefix("sqlite:")
                .filter(|p| !p.starts_with(":memory:"))
                .and_then(|p| Path::new(p).parent())
                .filter(|p| !p.as_os_str().is_empty())
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Cannot create {}", parent.display()))?;
            }

            let pool = create_pool(&url)
                .await
                .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
            run_migrations(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
            Ok(Arc::new(SqliteQueueStore::new(pool)))
        }
        StoreTarget::Memory => {
            info!("Using in-memory store; queues are lost on exit");
            Ok(Arc::new(InMemoryQueueStore::new()))
        }
    }
}
