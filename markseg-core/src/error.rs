//! Error types for markseg-core
//!
//! Segmentation itself never fails on well-formed or malformed markup; the
//! variants below cover caller contract violations and the I/O and
//! configuration surfaces around the engine.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Negative or otherwise unusable context window size
    #[error("invalid context window: {value} (must be a non-negative character count)")]
    InvalidContextWindow {
        /// The rejected value as supplied by the caller
        value: i64,
    },

    /// Invalid markup syntax or configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Index does not refer to a segment of the requested kind
    #[error("segment index {index} out of range or not a flagged segment")]
    InvalidSegmentIndex {
        /// The index that was requested
        index: usize,
    },

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 encoding: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SegmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_context_window_display() {
        let error = SegmentError::InvalidContextWindow { value: -3 };
        assert_eq!(
            error.to_string(),
            "invalid context window: -3 (must be a non-negative character count)"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let error = SegmentError::Configuration("close_token must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: close_token must not be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let error: SegmentError = io.into();
        assert!(matches!(error, SegmentError::Io(_)));
        assert!(error.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error: SegmentError = bad.into();
        assert!(error.to_string().starts_with("Invalid UTF-8 encoding"));
    }
}
