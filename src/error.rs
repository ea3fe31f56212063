use std::io;
use thiserror::Error;

/// Custom error type for moodfetch
#[derive(Error, Debug)]
pub enum MoodfetchError {
    /// The OS metrics source is unreachable or returned malformed data
    #[error("Metric collection failed: {0}")]
    Collection(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Unexpected(String),
}

/// Result type alias for moodfetch
pub type Result<T> = std::result::Result<T, MoodfetchError>;

impl MoodfetchError {
    /// Create a collection error
    pub fn collection<S: Into<String>>(msg: S) -> Self {
        MoodfetchError::Collection(msg.into())
    }

    /// Create an unexpected error
    pub fn unexpected<S: Into<String>>(msg: S) -> Self {
        MoodfetchError::Unexpected(msg.into())
    }

    /// Whether this error came from the metrics source.
    /// Everything else is treated as unexpected.
    pub fn is_collection(&self) -> bool {
        matches!(self, MoodfetchError::Collection(_))
    }
}
