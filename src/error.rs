//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.
//!
//! By policy, errors from the storage layer never escape the
//! [`TransactionStore`](crate::storage::TransactionStore) API: the store
//! catches them, logs them, and degrades to an empty or best-effort-in-memory
//! result. `FintrackError` is the currency between the key-value
//! implementations and the store.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors (e.g. unresolvable data directory)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (corrupt blob, failed write, lock poisoning)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FintrackError {
    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
