//! HTTP Error Mapping
//!
//! Maps application errors to status codes and a `{"error": "..."}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mediaq_core::domain::DomainError;
use mediaq_core::error::AppError;
use thiserror::Error;
use tracing::error;

use crate::types::ErrorBody;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::Domain(e) => match e {
                DomainError::HeadEmpty(_) => StatusCode::NOT_FOUND,
                DomainError::EntryNotFound { .. } => StatusCode::BAD_REQUEST,
                DomainError::EntryNotAtHead { .. } => StatusCode::CONFLICT,
                DomainError::MissingUrl | DomainError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            },
            AppError::Store(_)
            | AppError::Decode { .. }
            | AppError::Serialization(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<AppError>) -> StatusCode {
        ApiError::from(err.into()).status()
    }

    #[test]
    fn test_pop_error_statuses() {
        assert_eq!(status_of(DomainError::HeadEmpty("q".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(DomainError::EntryNotFound {
                queue_id: "q".into(),
                entry_id: "x".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::EntryNotAtHead {
                queue_id: "q".into(),
                entry_id: "x".into()
            }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_infrastructure_error_statuses() {
        assert_eq!(
            status_of(AppError::Store("down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let decode = AppError::Decode {
            payload: "x".into(),
            source: serde_json::from_str::<serde_json::Value>("x").unwrap_err(),
        };
        assert_eq!(status_of(decode), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
