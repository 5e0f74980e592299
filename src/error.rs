//! Unified error types for sentiview.
//!
//! This module provides a single [`SentiviewError`] enum covering every
//! failure the library can surface to a caller. Per-record problems found
//! while loading are described by [`RecordErrorKind`]; they are normally
//! recovered locally by the loader and only become a hard error in strict
//! mode.
//!
//! # Error Handling Philosophy
//!
//! - **Parameter errors** (bad date, `start > end`) are surfaced directly
//! - **Record errors** are counted and skipped, never fatal to a load
//! - **Degenerate input** (nothing matches) is not an error at all

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for sentiview operations.
///
/// # Example
///
/// ```rust
/// use sentiview::error::Result;
/// use sentiview::Post;
///
/// fn my_function() -> Result<Vec<Post>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SentiviewError>;

/// The error type for all sentiview operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SentiviewError {
    /// An I/O error occurred while reading the record source or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single record could not be turned into a [`Post`](crate::Post).
    ///
    /// The loader skips such records by default; this variant is only
    /// returned when skipping is disabled.
    #[error("Invalid record at line {line}: {kind}")]
    Record {
        /// 1-based line number in the source file (header is line 1)
        line: u64,
        /// What was wrong with the record
        #[source]
        kind: RecordErrorKind,
    },

    /// The record source lacks a column every record needs.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column
        column: &'static str,
    },

    /// Invalid date string in filter parameters.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The date range starts after it ends.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested start date
        start: chrono::NaiveDate,
        /// Requested end date
        end: chrono::NaiveDate,
    },

    /// Unknown output format, a format whose cargo feature is disabled, or
    /// an unusable input delimiter.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// Which format was being chosen (`"output"`, `"delimiter"`)
        format: &'static str,
        /// What was wrong with it
        message: String,
    },
}

/// Reasons a single record fails to load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordErrorKind {
    /// A required field is empty or absent.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// `created_at` does not match any accepted timestamp format.
    #[error("unparseable timestamp '{0}'")]
    Timestamp(String),

    /// A numeric field is not a number (or not a non-negative integer).
    #[error("field '{field}' has invalid value '{value}'")]
    Number {
        /// Column name
        field: &'static str,
        /// Raw value found in the source
        value: String,
    },

    /// `sentiment_score` parsed but is NaN or infinite.
    #[error("sentiment score '{0}' is not finite")]
    NonFiniteScore(String),

    /// The row itself could not be read (bad encoding, broken quoting).
    #[error("malformed row: {0}")]
    Malformed(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SentiviewError {
    /// Creates a record error for the given source line.
    pub fn record(line: u64, kind: RecordErrorKind) -> Self {
        SentiviewError::Record { line, kind }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        SentiviewError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid date range error.
    pub fn invalid_range(start: chrono::NaiveDate, end: chrono::NaiveDate) -> Self {
        SentiviewError::InvalidDateRange { start, end }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        SentiviewError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SentiviewError::Io(_))
    }

    /// Returns `true` if this is a per-record load error.
    pub fn is_record(&self) -> bool {
        matches!(self, SentiviewError::Record { .. })
    }

    /// Returns `true` if this error comes from validating filter parameters.
    pub fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            SentiviewError::InvalidDate { .. } | SentiviewError::InvalidDateRange { .. }
        )
    }
}
