//! HTTP layer for the students API.
//!
//! Router, request handlers, response envelopes, error mapping, and the
//! server lifecycle (bind, serve, graceful shutdown).

mod config;
mod errors;
mod response;
mod server;
mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{CreateStudentResponse, MessageResponse, StudentResponse, StudentsResponse};
pub use server::{run, HttpServer, ServerError};
pub use student_routes::{student_routes, StudentState};
