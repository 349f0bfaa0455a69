//! Student HTTP Routes
//!
//! Four endpoints over the storage trait: create, list, get-by-id, update.
//! No partial updates, deletes, pagination, filtering, or sorting.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{error, info};

use crate::storage::StudentStorage;
use crate::student::{validate, StudentDraft};

use super::errors::{ApiError, ApiResult};
use super::response::{CreateStudentResponse, MessageResponse, StudentResponse, StudentsResponse};

// ==================
// Shared State
// ==================

/// Student state shared across handlers
pub struct StudentState {
    pub storage: Arc<dyn StudentStorage>,
}

impl StudentState {
    pub fn new(storage: Arc<dyn StudentStorage>) -> Self {
        Self { storage }
    }
}

// ==================
// Routes
// ==================

/// Create student routes
pub fn student_routes(state: Arc<StudentState>) -> Router {
    Router::new()
        .route("/api/student", post(create_student_handler))
        .route("/api/students", get(list_students_handler))
        .route("/api/student/{id}", get(get_student_handler))
        .route("/api/student/{id}", put(update_student_handler))
        .with_state(state)
}

// ==================
// Helpers
// ==================

/// Decode and validate a student payload from a raw request body.
///
/// Empty body, malformed JSON, and rule violations each map to their own
/// client error.
fn decode_student_body(body: &str) -> Result<StudentDraft, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::EmptyBody);
    }
    let draft: StudentDraft =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    validate(&draft).map_err(|errors| ApiError::validation(&errors))?;
    Ok(draft)
}

// ==================
// Handlers
// ==================

async fn create_student_handler(
    State(state): State<Arc<StudentState>>,
    body: String,
) -> ApiResult<(StatusCode, Json<CreateStudentResponse>)> {
    info!("creating student");
    let draft = decode_student_body(&body)?;
    let student_id = state
        .storage
        .create_student(&draft.name, draft.age, &draft.email)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create student");
            ApiError::Storage(e)
        })?;
    info!(student_id, "student created");
    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse::new(student_id)),
    ))
}

async fn list_students_handler(
    State(state): State<Arc<StudentState>>,
) -> ApiResult<Json<StudentsResponse>> {
    info!("fetching all students");
    let students = state.storage.get_students().await.map_err(|e| {
        error!(error = %e, "failed to fetch students");
        ApiError::Storage(e)
    })?;
    info!(count = students.len(), "students fetched");
    Ok(Json(StudentsResponse::new(students)))
}

async fn get_student_handler(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<StudentResponse>> {
    info!(id = %id, "fetching student");
    let student_id = id.parse::<i64>().map_err(|_| {
        error!(id = %id, "invalid student ID");
        ApiError::InvalidId
    })?;
    let student = state
        .storage
        .get_student_by_id(student_id)
        .await
        .map_err(|e| {
            error!(id = student_id, error = %e, "failed to fetch student");
            ApiError::Storage(e)
        })?;
    Ok(Json(StudentResponse { student }))
}

async fn update_student_handler(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<String>,
    body: String,
) -> ApiResult<Json<MessageResponse>> {
    info!(id = %id, "updating student");
    let student_id = id.parse::<i64>().map_err(|_| {
        error!(id = %id, "invalid student ID");
        ApiError::InvalidId
    })?;
    let draft = decode_student_body(&body)?;
    state
        .storage
        .update_student(student_id, &draft.name, draft.age, &draft.email)
        .await
        .map_err(|e| {
            error!(id = student_id, error = %e, "failed to update student");
            ApiError::Storage(e)
        })?;
    info!(student_id, "student updated");
    Ok(Json(MessageResponse {
        message: "Student updated successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_rejected() {
        let err = decode_student_body("   ").unwrap_err();
        assert!(matches!(err, ApiError::EmptyBody));
    }

    #[test]
    fn test_malformed_json_carries_decode_message() {
        let err = decode_student_body("{not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[test]
    fn test_invalid_fields_aggregate_into_one_message() {
        let err = decode_student_body(r#"{"name": "", "age": 30, "email": "bad"}"#).unwrap_err();
        assert_eq!(err.to_string(), "name is required, email is invalid");
    }

    #[test]
    fn test_valid_body_decodes() {
        let draft =
            decode_student_body(r#"{"name": "Alice", "age": 30, "email": "alice@example.com"}"#)
                .unwrap();
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.age, 30);
    }
}
