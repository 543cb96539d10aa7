// Redis error mapping

use mediaq_core::error::AppError;

/// Convert a redis error into the core error type
pub fn map_redis_error(err: redis::RedisError) -> AppError {
    if err.is_connection_refusal() || err.is_connection_dropped() {
        AppError::Store(format!("Redis unavailable: {}", err))
    } else if err.is_timeout() {
        AppError::Store(format!("Redis timeout: {}", err))
    } else {
        AppError::Store(format!("Redis error: {}", err))
    }
}
