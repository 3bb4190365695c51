//! # API Error Responses
//!
//! JSON error body and the axum response conversion for [`AppError`].
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "success": false,
//!   "error": { "code": "CONFLICT", "message": "..." }
//! }
//! ```

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable error code (e.g. `NOT_FOUND`, `CONFLICT`).
    pub code:    String,
    /// Human-readable message.
    pub message: String,
}

/// Standard error envelope returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Error details.
    pub error:   ErrorBody,
}

impl ErrorResponse {
    /// Build the envelope for an application error.
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            error:   ErrorBody {
                code:    err.code().to_string(),
                message: err.message(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse::from_error(&self);
        let mut response = (status, Json(body)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_body() {
        let err = AppError::conflict("Team already has a project");
        let body = ErrorResponse::from_error(&err);
        assert!(!body.success);
        assert_eq!(body.error.code, "CONFLICT");
        assert_eq!(body.error.message, "Team already has a project");
    }

    #[test]
    fn test_into_response_status() {
        let err = AppError::not_found("Project not found");
        let response = err.into_response();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_validation_status() {
        let err = AppError::validation("Age must be between 18 and 70");
        let response = err.into_response();
        assert_eq!(response.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
