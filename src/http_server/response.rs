//! Success envelopes.
//!
//! Endpoint-specific shapes; there is no unified success wrapper. The
//! error envelope lives with `ApiError` in `errors`.

use serde::Serialize;

use crate::student::Student;

/// Status marker for the health endpoint.
pub const STATUS_OK: &str = "ok";
/// Status marker for error envelopes.
pub const STATUS_ERROR: &str = "error";
/// Status marker carried by the student list envelope.
pub const STATUS_SUCCESS: &str = "success";

/// `POST /api/student` success body.
#[derive(Debug, Serialize)]
pub struct CreateStudentResponse {
    pub message: String,
    pub student_id: i64,
}

impl CreateStudentResponse {
    pub fn new(student_id: i64) -> Self {
        Self {
            message: "Student created successfully".to_string(),
            student_id,
        }
    }
}

/// `GET /api/students` success body.
#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
    pub status: &'static str,
}

impl StudentsResponse {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students,
            status: STATUS_SUCCESS,
        }
    }
}

/// `GET /api/student/{id}` success body.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

/// `PUT /api/student/{id}` success body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
