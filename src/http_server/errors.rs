//! API error taxonomy and the JSON error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;
use crate::student::FieldError;

use super::response::STATUS_ERROR;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a request can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (400)
    // ==================
    /// Request body was empty.
    #[error("request body is empty")]
    EmptyBody,

    /// Request body was not valid JSON for the expected shape.
    #[error("{0}")]
    MalformedBody(String),

    /// One or more fields violated a validation rule; the message is the
    /// comma-joined per-field list.
    #[error("{0}")]
    Validation(String),

    /// Path id segment was not an integer.
    #[error("invalid student ID")]
    InvalidId,

    // ==================
    // Server Errors (500)
    // ==================
    /// The storage layer failed. The not-found condition takes this path
    /// too, keeping the wire behavior of the original service.
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Aggregate field validation errors into one comma-joined message.
    pub fn validation(errors: &[FieldError]) -> Self {
        let joined = errors
            .iter()
            .map(FieldError::message)
            .collect::<Vec<_>>()
            .join(", ");
        ApiError::Validation(joined)
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyBody
            | ApiError::MalformedBody(_)
            | ApiError::Validation(_)
            | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error envelope: `{"status": "error", "error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            status: STATUS_ERROR,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::ValidationRule;

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(ApiError::EmptyBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MalformedBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err = ApiError::Storage(StorageError::NotFound(3));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "no student found with ID 3");
    }

    #[test]
    fn test_validation_joins_field_messages() {
        let err = ApiError::validation(&[
            FieldError {
                field: "name",
                rule: ValidationRule::Required,
            },
            FieldError {
                field: "email",
                rule: ValidationRule::Email,
            },
        ]);
        assert_eq!(err.to_string(), "name is required, email is invalid");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = ErrorResponse::from(&ApiError::EmptyBody);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "error": "request body is empty"})
        );
    }
}
