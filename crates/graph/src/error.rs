//! Graph Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A graph error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The in-memory document could not be written out as JSON text.
    #[display("failed to serialize JSON-LD document")]
    Serialize,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
