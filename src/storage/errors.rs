//! Storage error taxonomy.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matches the given id.
    #[error("no student found with ID {0}")]
    NotFound(i64),

    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Constraint(String),

    /// Schema bootstrap failed on open.
    #[error("schema bootstrap failed: {0}")]
    Schema(String),

    /// Underlying SQLite error.
    #[error(transparent)]
    Database(#[from] libsql::Error),
}

impl StorageError {
    /// Whether this is the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }

    /// Whether this is a uniqueness-constraint violation.
    pub fn is_constraint(&self) -> bool {
        matches!(self, StorageError::Constraint(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = StorageError::NotFound(42);
        assert_eq!(err.to_string(), "no student found with ID 42");
        assert!(err.is_not_found());
        assert!(!err.is_constraint());
    }

    #[test]
    fn test_constraint_preserves_engine_text() {
        let err = StorageError::Constraint("UNIQUE constraint failed: students.name".to_string());
        assert!(err.to_string().contains("students.name"));
        assert!(err.is_constraint());
    }
}
