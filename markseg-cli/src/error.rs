//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failure categories
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Markup problems found by `validate`
    InvalidMarkup {
        /// Number of files with at least one error
        files: usize,
        /// Total number of unbalanced tokens
        errors: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidMarkup { files, errors } => {
                write!(f, "Invalid markup: {errors} error(s) in {files} file(s)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("doc.html".to_string());
        assert_eq!(error.to_string(), "File not found: doc.html");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("negative context".to_string());
        assert_eq!(error.to_string(), "Configuration error: negative context");
    }

    #[test]
    fn test_invalid_markup_display() {
        let error = CliError::InvalidMarkup {
            files: 2,
            errors: 5,
        };
        assert_eq!(error.to_string(), "Invalid markup: 5 error(s) in 2 file(s)");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("x".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
