//! Unified error handling for the HTTP API.
//!
//! Provides an `ApiError` type that maps store failures onto status codes
//! and a JSON body. All route handlers return `Result<T, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use krishibazaar_store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    /// Stable machine-readable kind for the `error` field of the body.
    fn kind(&self) -> &'static str {
        match self {
            Self::Store(StoreError::DuplicateEmail) => "DuplicateEmail",
            Self::Store(StoreError::InvalidCredentials) => "InvalidCredentials",
            Self::Store(StoreError::NotFound(_)) => "NotFound",
            Self::Store(_) => "Internal",
            Self::BadRequest(_) => "BadRequest",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::DuplicateEmail) => StatusCode::CONFLICT,
            Self::Store(StoreError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request error");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: self.kind(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
