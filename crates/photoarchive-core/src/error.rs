//! Error types for photo archive core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Core error type for archive operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The store already holds its maximum number of records
    #[error("Archive is full (max {capacity} records)")]
    CapacityExceeded { capacity: usize },

    /// A query was run against a store with no records
    #[error("Archive is empty")]
    EmptyStore,

    /// A location query was empty
    #[error("Search query is empty")]
    EmptyQuery,

    /// Sorting needs at least two records
    #[error("Nothing to sort ({len} record(s) in archive)")]
    NothingToSort { len: usize },

    /// Field value failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for ArchiveError {
    fn from(err: std::io::Error) -> Self {
        ArchiveError::Storage(err.to_string())
    }
}
