//! Field validation for incoming student payloads.
//!
//! Rules are explicit tagged variants, so the rule-to-message mapping is a
//! plain `match` that can grow new rules without inspecting error
//! internals.

use std::sync::LazyLock;

use regex::Regex;

use super::StudentDraft;

// Syntactic check only: local part, '@', domain with at least one dot.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// The constraint a field can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Field is required and was missing or zero-valued.
    Required,
    /// Field must be a syntactically valid email address.
    Email,
}

/// A single violated rule on a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: ValidationRule,
}

impl FieldError {
    /// Human-readable message for the violated rule.
    ///
    /// `Required` gets its own wording; every other rule renders as the
    /// generic "is invalid".
    pub fn message(&self) -> String {
        match self.rule {
            ValidationRule::Required => format!("{} is required", self.field),
            _ => format!("{} is invalid", self.field),
        }
    }
}

/// Validate a draft, collecting one error per invalid field.
///
/// Zero values count as missing: an empty name or email and an age of 0
/// all violate `Required`. A non-empty email that does not look like an
/// email violates `Email`.
pub fn validate(draft: &StudentDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.name.is_empty() {
        errors.push(FieldError {
            field: "name",
            rule: ValidationRule::Required,
        });
    }
    if draft.age == 0 {
        errors.push(FieldError {
            field: "age",
            rule: ValidationRule::Required,
        });
    }
    if draft.email.is_empty() {
        errors.push(FieldError {
            field: "email",
            rule: ValidationRule::Required,
        });
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.push(FieldError {
            field: "email",
            rule: ValidationRule::Email,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
