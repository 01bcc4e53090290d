//! Error types for the vanlang-nlp library.
//!
//! Classification itself never fails: every input string produces an
//! [`IntentResult`](crate::ml::intent_classifier::IntentResult). Errors only
//! surface while building a classifier (loading or validating a keyword
//! table, compiling the matcher) and from the command line front end.
//!
//! # Examples
//!
//! ```
//! use vanlang_nlp::error::{NlpError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(NlpError::config("keyword table is empty"))
//! }
//!
//! assert_eq!(
//!     load().unwrap_err().to_string(),
//!     "Configuration error: keyword table is empty"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for vanlang-nlp operations.
#[derive(Error, Debug)]
pub enum NlpError {
    /// I/O errors (reading keyword tables, batch files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid keyword table or other configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (normalization, matcher construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument passed by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NlpError.
pub type Result<T> = std::result::Result<T, NlpError>;

impl NlpError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NlpError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NlpError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NlpError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NlpError::config("duplicate category");
        assert_eq!(error.to_string(), "Configuration error: duplicate category");

        let error = NlpError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = NlpError::invalid_argument("empty file");
        assert_eq!(error.to_string(), "Invalid argument: empty file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nlp_error = NlpError::from(io_error);

        match nlp_error {
            NlpError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        match NlpError::from(json_error) {
            NlpError::Json(_) => {}
            _ => panic!("Expected JSON error variant"),
        }
    }
}
