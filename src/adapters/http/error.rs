//! Top-level error-to-response mapping.
//!
//! Every failure leaving an HTTP handler goes through [`ApiError`], which
//! turns a `DomainError` into a status code and a JSON body:
//!
//! ```json
//! { "code": "INCOMPLETE_ANSWERS", "message": "...", "details": { "actual": "19" } }
//! ```

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}

/// An HTTP status paired with an error body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    /// Auth backend unreachable. Has no domain code of its own.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: ErrorResponse::new("SERVICE_UNAVAILABLE", message),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        DomainError::new(ErrorCode::Unauthorized, message).into()
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        DomainError::validation(field, message).into()
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        c if c.is_client_error() => StatusCode::BAD_REQUEST,
        c if c.is_not_found() => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(err.code);

        if status.is_server_error() {
            // Storage and internal messages stay in the logs.
            tracing::error!(code = %err.code, error = %err.message, "Request failed");
            return Self {
                status,
                body: ErrorResponse::new(err.code.to_string(), "An internal error occurred"),
            };
        }

        Self {
            status,
            body: ErrorResponse {
                code: err.code.to_string(),
                message: err.message,
                details: err.details,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
