//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatStatsError`] enum that covers every
//! fallible operation in the library.
//!
//! The analysis core itself has no fatal errors: a transcript that matches
//! nothing produces an empty dataset. Errors come from the edges: reading
//! files, interpreting user-supplied dates and window names, compiling
//! user-supplied templates, and writing reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ChatDataset;
///
/// fn load() -> Result<ChatDataset> {
///     Ok(ChatDataset::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatStatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatStatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input transcript doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8 text.
    ///
    /// Transcripts are plain text; binary uploads are rejected here before
    /// they reach the parser.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A date token could not be canonicalized or interpreted.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown time window selector.
    #[error("Unknown window '{input}'. Expected one of: {expected}")]
    InvalidWindow {
        /// The selector that was provided
        input: String,
        /// Comma-separated list of accepted selectors
        expected: String,
    },

    /// A user-supplied membership template failed to compile.
    #[error("Invalid membership pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied
        pattern: String,
        /// Why it was rejected (regex syntax error or missing capture group)
        reason: String,
    },

    /// The report path has an extension no writer handles.
    #[error("Unsupported output format for '{}'", path.display())]
    UnsupportedFormat {
        /// Path whose extension was inspected
        path: PathBuf,
    },

    /// The requested report format was compiled out.
    #[error("Output format {format} requires the '{feature}' feature to be enabled")]
    FeatureDisabled {
        /// Format name
        format: &'static str,
        /// Cargo feature that provides it
        feature: &'static str,
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

impl From<std::string::FromUtf8Error> for ChatStatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatStatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatStatsError {
    /// Creates an invalid date error for a transcript date token.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatStatsError::InvalidDate {
            input: input.into(),
            expected: "D[D].M[M].YY[YY] or D[D]/M[M]/YY[YY]",
        }
    }

    /// Creates an invalid window error.
    pub fn invalid_window(input: impl Into<String>, expected: &[&str]) -> Self {
        ChatStatsError::InvalidWindow {
            input: input.into(),
            expected: expected.join(", "),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        ChatStatsError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a UTF-8 error with context about which input was rejected.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatStatsError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatStatsError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatStatsError::InvalidDate { .. })
    }

    /// Returns `true` if this is a window selector error.
    pub fn is_invalid_window(&self) -> bool {
        matches!(self, ChatStatsError::InvalidWindow { .. })
    }

    /// Returns `true` if the input was rejected as non-text.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatStatsError::Utf8 { .. })
    }
}
