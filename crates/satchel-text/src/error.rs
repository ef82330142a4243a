//! Text error types (standalone).

use thiserror::Error;

/// Errors produced by the text utilities.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A format delimiter side was empty
    #[error("format delimiter must not be empty")]
    EmptyDelimiter,
}

/// Result type alias for text operations
pub type TextResult<T> = std::result::Result<T, TextError>;
