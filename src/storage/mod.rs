//! Student persistence subsystem
//!
//! `StudentStorage` is the contract the HTTP layer consumes; `SqliteStorage`
//! is the only backend today. Handlers depend on the trait object, so an
//! alternate relational engine can be substituted without touching them.

mod errors;
mod sqlite;

pub use errors::{StorageError, StorageResult};
pub use sqlite::SqliteStorage;

use async_trait::async_trait;

use crate::student::Student;

/// Persistence contract for student records.
///
/// Callers validate fields before writing; implementations enforce the
/// name/email uniqueness constraints and surface violations as
/// [`StorageError::Constraint`].
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// Insert a new student and return its assigned id.
    ///
    /// The record is durably persisted before this returns.
    async fn create_student(&self, name: &str, age: i64, email: &str) -> StorageResult<i64>;

    /// All students in storage order; empty when none exist.
    async fn get_students(&self) -> StorageResult<Vec<Student>>;

    /// Fetch one student.
    ///
    /// [`StorageError::NotFound`] when no record matches `id`.
    async fn get_student_by_id(&self, id: i64) -> StorageResult<Student>;

    /// Overwrite name, age, and email for one row.
    ///
    /// [`StorageError::NotFound`] when no record matches `id` (zero rows
    /// affected).
    async fn update_student(&self, id: i64, name: &str, age: i64, email: &str)
        -> StorageResult<()>;
}
