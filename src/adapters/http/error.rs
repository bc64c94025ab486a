//! Wire-level error translation.
//!
//! The single place where `ErrorCode` becomes an HTTP status. Storage
//! and internal failures are logged server-side and surfaced as an
//! opaque body; every other code passes its message through.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body: `{ "error": "...", "code": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// JSON confirmation body for deletes: `{ "message": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Wrapper that lets handlers bubble `DomainError` with `?`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::UserNotFound | ErrorCode::StoreNotFound | ErrorCode::RecordNotFound => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Internals stay server-side.
            tracing::error!(code = %err.code, message = %err.message, "request failed");
            ErrorResponse::new("Internal server error", ErrorCode::InternalError.to_string())
        } else {
            ErrorResponse::new(err.message, err.code.to_string())
        };

        (status, Json(body)).into_response()
    }
}
