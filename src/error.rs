//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report: reading the input, decoding it, finding no
//! parseable lines in it, and writing exports.
//!
//! Lines that don't match the chat line pattern are **not** errors. The parser
//! skips them. Only a file where *no* line matches is reported, as
//! [`ChatlensError::NoMessages`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// Reading the export or writing the `--output` file failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Not a single line of the input matched the chat line pattern.
    #[error("Could not parse messages{}. Please check the file format.", path.as_ref().map(|p| format!(" from {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// The file that was parsed, if known
        path: Option<PathBuf>,
    },

    /// A format or pattern could not be used.
    ///
    /// This occurs when:
    /// - The line pattern fails to compile
    /// - An output format name or extension is not recognized
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "input".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a decode error for the given context (usually a file name).
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates a "no messages" error, optionally naming the parsed file.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatlensError::NoMessages { path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input could not be decoded as UTF-8.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatlensError::Utf8 { .. })
    }

    /// Returns `true` if no line of the input could be parsed.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}
