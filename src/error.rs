//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input rejected before anything was written
    #[error("Validation error: {0}")]
    Validation(String),

    /// The database file could not be opened, created or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Analysis was requested but there are no records
    #[error("No expenses to analyze")]
    EmptyDataset,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a validation error for an empty input field
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("missing field: {}", field))
    }

    /// Create a validation error for an amount that does not parse
    pub fn not_a_number(input: &str) -> Self {
        Self::Validation(format!("not a number: '{}'", input))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the storage layer could not be reached
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// Informational outcomes are shown as notices rather than errors
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyDataset)
    }
}

// Implement From traits for common error types

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

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
