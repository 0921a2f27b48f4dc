//! Error types for the Glossa library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`GlossaError`] enum. Building a model can fail on bad configuration,
//! snapshot handling can fail on missing or unreadable files, and the
//! classifiers reject contract violations such as mismatched vector
//! dimensions. None of these are recoverable locally; they surface to the
//! caller as-is.
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlossaError::config("missing stopword table"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Glossa operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O errors (corpus files, snapshot files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or malformed configuration (language list, alphabet table,
    /// stopword table, or a reference corpus). Fatal at build time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A reload from snapshot was requested but the snapshot does not exist.
    /// The caller must fall back to an explicit fresh build.
    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(PathBuf),

    /// A snapshot exists but could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// A per-language lookup was made for a code outside the configured set.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Classifier contract violations (empty training set, dimension
    /// mismatch between a vector and the fitted feature space).
    #[error("Classification error: {0}")]
    Classify(String),

    /// JSON serialization errors (CLI output formatting)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`GlossaError`].
pub type Result<T> = std::result::Result<T, GlossaError>;

impl GlossaError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GlossaError::Config(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        GlossaError::Snapshot(msg.into())
    }

    /// Create a new unknown-language error.
    pub fn unknown_language<S: Into<String>>(code: S) -> Self {
        GlossaError::UnknownLanguage(code.into())
    }

    /// Create a new classification error.
    pub fn classify<S: Into<String>>(msg: S) -> Self {
        GlossaError::Classify(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GlossaError::config("bad alphabet table");
        assert_eq!(error.to_string(), "Configuration error: bad alphabet table");

        let error = GlossaError::unknown_language("xx");
        assert_eq!(error.to_string(), "Unknown language: xx");

        let error = GlossaError::classify("dimension mismatch");
        assert_eq!(error.to_string(), "Classification error: dimension mismatch");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let glossa_error = GlossaError::from(io_error);

        match glossa_error {
            GlossaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_snapshot_not_found_display() {
        let error = GlossaError::SnapshotNotFound(PathBuf::from("/tmp/model.bin"));
        assert_eq!(error.to_string(), "Snapshot not found: /tmp/model.bin");
    }
}
