//! Value error types (standalone).
//!
//! Accessor failures fall into exactly two kinds that callers must be able
//! to tell apart: absence (an index or key that is not there) and type
//! mismatch (a value that is there but cannot be coerced to the requested
//! shape). `WithContext` wraps either kind without changing its
//! classification.

use thiserror::Error;

/// Errors produced by the value model.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Slice index out of bounds
    #[error("index {index} out of bounds (length: {length})")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Map key not found
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },

    /// Value present but not coercible to the requested kind
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Context information (nested error with additional info)
    #[error("{message}: {source}")]
    WithContext {
        message: String,
        #[source]
        source: Box<ValueError>,
    },
}

impl ValueError {
    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, message: impl Into<String>) -> Self {
        Self::WithContext {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Add index context
    pub fn at_index(self, index: usize) -> Self {
        self.with_context(format!("at index: {index}"))
    }

    /// Add key context
    pub fn at_key(self, key: impl Into<String>) -> Self {
        self.with_context(format!("at key: '{}'", key.into()))
    }
}

impl ValueError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::IndexOutOfBounds { .. } => "VALUE_INDEX_OUT_OF_BOUNDS",
            Self::KeyNotFound { .. } => "VALUE_KEY_NOT_FOUND",
            Self::TypeMismatch { .. } => "VALUE_TYPE_MISMATCH",
            Self::WithContext { source, .. } => source.code(),
        }
    }

    /// True when the index or key was simply not there.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::IndexOutOfBounds { .. } | Self::KeyNotFound { .. } => true,
            Self::TypeMismatch { .. } => false,
            Self::WithContext { source, .. } => source.is_absent(),
        }
    }

    /// True when a value was present but could not be coerced.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Self::TypeMismatch { .. } => true,
            Self::IndexOutOfBounds { .. } | Self::KeyNotFound { .. } => false,
            Self::WithContext { source, .. } => source.is_type_mismatch(),
        }
    }
}

/// Result type alias for value operations
pub type ValueResult<T> = std::result::Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds() {
        let err = ValueError::index_out_of_bounds(5, 3);
        assert_eq!(err.code(), "VALUE_INDEX_OUT_OF_BOUNDS");
        assert!(err.is_absent());
        assert!(!err.is_type_mismatch());
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_key_not_found() {
        let err = ValueError::key_not_found("missing");
        assert_eq!(err.code(), "VALUE_KEY_NOT_FOUND");
        assert!(err.is_absent());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_type_mismatch() {
        let err = ValueError::type_mismatch("slice", "integer");
        assert_eq!(err.code(), "VALUE_TYPE_MISMATCH");
        assert!(err.is_type_mismatch());
        assert!(!err.is_absent());
    }

    #[test]
    fn test_with_context_preserves_classification() {
        let err = ValueError::key_not_found("test")
            .at_key("outer")
            .at_index(0);

        assert!(err.is_absent());
        assert_eq!(err.code(), "VALUE_KEY_NOT_FOUND");

        let msg = err.to_string();
        assert!(msg.contains("test"));
        assert!(msg.contains("outer"));
        assert!(msg.contains("index: 0"));
    }

    #[test]
    fn test_kinds_are_disjoint() {
        let absent = ValueError::index_out_of_bounds(1, 0);
        let mismatch = ValueError::type_mismatch("smap", "text");
        assert!(absent.is_absent() != absent.is_type_mismatch());
        assert!(mismatch.is_type_mismatch() != mismatch.is_absent());
    }
}
