//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and a JSON response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use monitor_core::{CoreError, StoreError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Service unavailable (the store is shutting down).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!(status = status.as_u16(), "{message}");

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store(store_err) => store_err.into(),
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Closed => Self::ServiceUnavailable(err.to_string()),
            StoreError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            StoreError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}
