//! SQLite-backed student storage (libsql).
//!
//! One long-lived connection against a single database file. Opening
//! bootstraps the schema idempotently; every operation is exactly one
//! parameterized statement, parameters always bound.

use async_trait::async_trait;
use libsql::{params, Builder, Connection, Row};

use crate::student::Student;

use super::errors::{StorageError, StorageResult};
use super::StudentStorage;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    age INTEGER NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

const SELECT_COLS: &str = "id, name, age, email";

/// Student storage backed by a libsql database file.
pub struct SqliteStorage {
    // Keeps the database handle alive for the connection's lifetime.
    #[allow(dead_code)]
    db: libsql::Database,
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file and bootstrap the schema.
    ///
    /// Safe to call on every process start. `":memory:"` gives a private
    /// in-memory database for tests.
    pub async fn open(path: &str) -> StorageResult<Self> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        conn.execute(CREATE_TABLE_SQL, ())
            .await
            .map_err(|e| StorageError::Schema(e.to_string()))?;
        Ok(Self { db, conn })
    }
}

fn row_to_student(row: &Row) -> StorageResult<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        email: row.get(3)?,
    })
}

/// Map write failures, surfacing UNIQUE violations as `Constraint`.
fn map_write_err(err: libsql::Error) -> StorageError {
    let text = err.to_string();
    if text.contains("UNIQUE constraint failed") {
        StorageError::Constraint(text)
    } else {
        StorageError::Database(err)
    }
}

#[async_trait]
impl StudentStorage for SqliteStorage {
    async fn create_student(&self, name: &str, age: i64, email: &str) -> StorageResult<i64> {
        self.conn
            .execute(
                "INSERT INTO students (name, age, email) VALUES (?1, ?2, ?3)",
                params![name, age, email],
            )
            .await
            .map_err(map_write_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    async fn get_students(&self) -> StorageResult<Vec<Student>> {
        let mut rows = self
            .conn
            .query(&format!("SELECT {SELECT_COLS} FROM students"), ())
            .await?;
        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }

    async fn get_student_by_id(&self, id: i64) -> StorageResult<Student> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM students WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StorageError::NotFound(id))?;
        row_to_student(&row)
    }

    async fn update_student(
        &self,
        id: i64,
        name: &str,
        age: i64,
        email: &str,
    ) -> StorageResult<()> {
        let affected = self
            .conn
            .execute(
                "UPDATE students SET name = ?1, age = ?2, email = ?3 WHERE id = ?4",
                params![name, age, email, id],
            )
            .await
            .map_err(map_write_err)?;
        if affected == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_storage() -> SqliteStorage {
        SqliteStorage::open(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_positive_id() {
        let storage = memory_storage().await;
        let id = storage
            .create_student("Alice", 30, "alice@example.com")
            .await
            .unwrap();
        assert!(id > 0);
    }

    #[tokio::test]
    async fn test_insertion_order_is_preserved() {
        let storage = memory_storage().await;
        storage
            .create_student("Alice", 30, "alice@example.com")
            .await
            .unwrap();
        storage
            .create_student("Bob", 25, "bob@example.com")
            .await
            .unwrap();
        let students = storage.get_students().await.unwrap();
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_unique_name_maps_to_constraint() {
        let storage = memory_storage().await;
        storage
            .create_student("Alice", 30, "alice@example.com")
            .await
            .unwrap();
        let err = storage
            .create_student("Alice", 31, "other@example.com")
            .await
            .unwrap_err();
        assert!(err.is_constraint(), "expected constraint, got: {err}");
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_not_found() {
        let storage = memory_storage().await;
        let err = storage
            .update_student(99, "Alice", 30, "alice@example.com")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
