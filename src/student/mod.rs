//! Student domain types
//!
//! `Student` is the persisted record; `StudentDraft` is the incoming
//! `{name, age, email}` payload before validation. Draft fields default to
//! their zero values on deserialization, so an absent field and an empty
//! one fail validation the same way.

mod validate;

pub use validate::{validate, FieldError, ValidationRule};

use serde::{Deserialize, Serialize};

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Incoming student payload for create/update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub email: String,
}
