//! Core error types for the goal manager.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the goal manager.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl Error {
    /// Shorthand for a missing record of the given kind.
    pub fn not_found(entity: &str, id: &str) -> Self {
        Error::Database(DatabaseError::NotFound(format!("{} '{}'", entity, id)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::NotFound(_)))
    }

    /// Field-level errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Error::Validation(ValidationError::Fields(fields)) => Some(fields),
            _ => None,
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Fields(FieldErrors),
}

pub const BLANK: &str = "can't be blank";
pub const MUST_EXIST: &str = "must exist";

/// Per-field validation messages, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// Records a "can't be blank" error when `value` is empty after trimming.
    pub fn require_present(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, BLANK);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// `Ok(())` when no field failed, otherwise a validation error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(ValidationError::Fields(self)))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{} {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_collect_every_failure() {
        let mut errors = FieldErrors::new();
        errors.require_present("name", "");
        errors.require_present("description", "   ");
        errors.require_present("other", "present");

        assert!(errors.contains("name"));
        assert!(errors.contains("description"));
        assert!(!errors.contains("other"));
        assert_eq!(
            errors.to_string(),
            "description can't be blank, name can't be blank"
        );
    }

    #[test]
    fn empty_field_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn field_errors_surface_through_error() {
        let mut errors = FieldErrors::new();
        errors.add("client", MUST_EXIST);
        let err = errors.into_result().unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|f| f.get("client")),
            Some(&["must exist".to_string()][..])
        );
        assert!(!err.is_not_found());
        assert!(Error::not_found("Goal", "x").is_not_found());
    }
}
