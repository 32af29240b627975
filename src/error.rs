//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Every fallible operation returns one of these; none of them is fatal to
//! the in-memory store.

use thiserror::Error;

use crate::validation::ValidationError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// The title was empty after trimming
    #[error("Please enter a title")]
    EmptyTitle,

    /// The amount did not parse, was not strictly positive or exceeded the maximum
    #[error("Amount must be positive: '{0}'")]
    InvalidAmount(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The durable copy could not be read or written.
    /// In-memory state stays authoritative when this is returned.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input that is malformed before it ever reaches the validator
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle | Self::InvalidAmount(_) | Self::Validation(_)
        )
    }

    /// Check if this is a warning-class persistence failure
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::PersistenceFailure(_))
    }
}

impl From<ValidationError> for ExpenseError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyTitle => Self::EmptyTitle,
            ValidationError::InvalidAmount(raw) => Self::InvalidAmount(raw),
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
