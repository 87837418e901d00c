//! Mapping Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A mapping error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A metadata value that must be numeric could not be read as a number.
    #[display("tag '{tag}' is not numeric, found value: {value}")]
    Coercion {
        /// The tag being coerced.
        tag: &'static str,
        /// The rendered value that failed to parse.
        value: String,
    },
    /// The file path could not be made absolute.
    #[display("unable to resolve an absolute file path")]
    Path,
    /// An internal contract was broken; this is a bug, not bad input.
    #[display("internal invariant violated: {_0}")]
    Invariant(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
