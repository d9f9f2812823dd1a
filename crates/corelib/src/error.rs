//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Node URL could not be parsed
    #[error("Invalid node URL {url:?}: {reason}")]
    InvalidNodeUrl { url: String, reason: String },
    /// Node URL carried a scheme other than `storj://`
    #[error("Unknown node URL scheme: {0}")]
    UnknownScheme(String),
}
