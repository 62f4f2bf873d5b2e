//! Error types for tensor compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Tensor compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// No symbols were observed where at least one is required.
    #[error("empty input: {context}")]
    EmptyInput { context: &'static str },

    /// Alphabet exceeds what a coding table can represent.
    #[error("alphabet too large: {size} symbols, maximum {max}")]
    AlphabetTooLarge { size: usize, max: usize },

    /// Malformed descriptor handed over by the quantizer.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A table construction invariant was violated.
    #[error("coding table corrupted: {message}")]
    TableCorrupted { message: String },

    /// Serialized output would exceed the preallocated buffer.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// Compression produced no byte savings.
    #[error("ineffective compression: {compressed} bytes from {original}")]
    Ineffective { original: usize, compressed: usize },
}

impl Error {
    /// Create an empty-input error.
    pub fn empty_input(context: &'static str) -> Self {
        Error::EmptyInput { context }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a table-corruption error.
    pub fn table_corrupted(message: impl Into<String>) -> Self {
        Error::TableCorrupted {
            message: message.into(),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Check if the caller can sensibly continue by skipping compression
    /// for this tensor (as opposed to a malformed pipeline).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::BufferTooSmall { .. } | Error::Ineffective { .. }
        )
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyInput { .. } => "empty_input",
            Error::AlphabetTooLarge { .. } => "alphabet_too_large",
            Error::InvalidInput { .. } => "invalid_input",
            Error::TableCorrupted { .. } => "table_corrupted",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Ineffective { .. } => "ineffective",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::buffer_too_small(128, 64);
        assert_eq!(err.to_string(), "buffer too small: need 128 bytes, got 64");

        let err = Error::empty_input("symbol stream");
        assert_eq!(err.to_string(), "empty input: symbol stream");
    }

    #[test]
    fn test_categories_are_distinct() {
        let errors = [
            Error::empty_input("x"),
            Error::AlphabetTooLarge { size: 1, max: 0 },
            Error::invalid_input("x"),
            Error::table_corrupted("x"),
            Error::buffer_too_small(1, 0),
            Error::Ineffective {
                original: 1,
                compressed: 1,
            },
        ];
        let mut categories: Vec<_> = errors.iter().map(|e| e.category()).collect();
        categories.dedup();
        assert_eq!(categories.len(), errors.len());
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::buffer_too_small(2, 1).is_recoverable());
        assert!(!Error::table_corrupted("spread").is_recoverable());
    }
}
