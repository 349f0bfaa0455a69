//! student-api - a minimal students CRUD service over an embedded SQLite store
//!
//! HTTP layer (axum) → storage trait → libsql-backed database file.

pub mod config;
pub mod http_server;
pub mod storage;
pub mod student;
