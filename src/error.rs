//! Command Error Types

use derive_more::{Display, Error};

/// A command error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for the command.
pub type Result<T> = std::result::Result<T, Error>;

/// Which stage of the run failed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("unable to load configuration")]
    Config,
    #[display("unable to set up logging")]
    Logging,
    #[display("unable to read image metadata")]
    Extract,
    #[display("unable to build the observable graph")]
    Mapping,
    #[display("unable to write JSON-LD output")]
    Output,
}
impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
