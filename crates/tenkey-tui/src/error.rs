//! Error types for the terminal frontend

use thiserror::Error;

/// Result type for frontend operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur in the terminal frontend.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal I/O failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A replay script contained a key with no calculator meaning
    #[error("key '{key}' maps to no calculator input")]
    InvalidKey {
        /// The offending character
        key: char,
    },
}
