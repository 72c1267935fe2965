//! Error types for the PII redaction library.
//!
//! Errors are categorized by their source: text extraction, pattern
//! compilation, backend (MuPDF) failures, and adapter input problems.
//! A candidate whose literal text cannot be located on the page is *not*
//! an error; see [`crate::region`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for redaction operations.
pub type RedactResult<T> = Result<T, RedactError>;

/// Error type for all redaction operations.
#[derive(Debug, Error)]
pub enum RedactError {
    /// A page's text could not be obtained. Fatal for the run.
    #[error("text extraction failed on page {page}: {reason}")]
    Extraction { page: usize, reason: String },

    /// A pattern-table entry failed to compile. Fatal at startup.
    #[error("invalid pattern for label '{label}': {source}")]
    PatternCompile {
        label: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Error occurred while reading or writing files.
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backend-specific error (MuPDF, pdf-extract, etc.).
    #[error("{backend} backend error: {message}")]
    Backend { backend: &'static str, message: String },

    /// Invalid configuration or parameters.
    #[error("invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// The external entity source could not produce entities.
    #[error("entity source error: {reason}")]
    EntitySource { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RedactError::Extraction {
            page: 3,
            reason: "document closed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "text extraction failed on page 3: document closed"
        );
    }

    #[test]
    fn test_pattern_compile_source_chain() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RedactError::PatternCompile {
            label: "email",
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("email"));
    }
}
