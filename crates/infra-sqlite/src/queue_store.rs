// SQLite QueueStore Implementation
//
// Each queue is the set of rows sharing a queue_id, ordered by seq. Every
// trait method is one SQL statement, so each is atomic on its own.

use async_trait::async_trait;
use mediaq_core::domain::QueueId;
use mediaq_core::error::{AppError, Result};
use mediaq_core::port::QueueStore;
use sqlx::SqlitePool;

// Helper to convert sqlx::Error to AppError with structured information
fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            // SQLite error codes: https://www.sqlite.org/rescode.html
            Some(code) if code.as_ref() == "5" => {
                AppError::Store(format!("Database locked (SQLITE_BUSY): {}", db_err.message()))
            }
            Some(code) if code.as_ref() == "13" => {
                AppError::Store(format!("Database full: {}", db_err.message()))
            }
            Some(code) => AppError::Store(format!(
                "Database error [{}]: {}",
                code.as_ref(),
                db_err.message()
            )),
            None => AppError::Store(format!("Database error: {}", db_err.message())),
        },
        // Connection, pool, protocol errors
        _ => AppError::Store(err.to_string()),
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

pub struct SqliteQueueStore {
    pool: SqlitePool,
}

impl SqliteQueueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueueStore for SqliteQueueStore {
    async fn push_tail(&self, key: &QueueId, payload: &str) -> Result<()> {
        sqlx::query("INSERT INTO queue_entries (queue_id, payload) VALUES (?, ?)")
            .bind(key.as_str())
            .bind(payload)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn range(&self, key: &QueueId, start: usize, len: usize) -> Result<Vec<String>> {
        sqlx::query_scalar(
            r#"
            SELECT payload FROM queue_entries
            WHERE queue_id = ?
            ORDER BY seq
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(key.as_str())
        .bind(to_i64(len))
        .bind(to_i64(start))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn peek(&self, key: &QueueId, index: usize) -> Result<Option<String>> {
        sqlx::query_scalar(
            r#"
            SELECT payload FROM queue_entries
            WHERE queue_id = ?
            ORDER BY seq
            LIMIT 1 OFFSET ?
            "#,
        )
        .bind(key.as_str())
        .bind(to_i64(index))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn pop_head(&self, key: &QueueId) -> Result<Option<String>> {
        sqlx::query_scalar(
            r#"
            DELETE FROM queue_entries
            WHERE seq = (SELECT MIN(seq) FROM queue_entries WHERE queue_id = ?)
            RETURNING payload
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn pop_head_if(&self, key: &QueueId, expected: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM queue_entries
            WHERE seq = (SELECT MIN(seq) FROM queue_entries WHERE queue_id = ?)
              AND payload = ?
            "#,
        )
        .bind(key.as_str())
        .bind(expected)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn clear_all(&self) -> Result<()> {
        let result = sqlx::query("DELETE FROM queue_entries")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::warn!(deleted = result.rows_affected(), "Cleared all queues");
        Ok(())
    }
}
