//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation errors live in [`crate::domain::errors`] and convert into these
//! via `#[from]`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single contact record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The phone number to edit is not on the record
    #[error("Phone number not found on record: {0}")]
    PhoneNotFound(String),

    /// The replacement value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during book-wide operations (search, save, load).
#[derive(Error, Debug)]
pub enum BookError {
    /// Reading or writing the book file failed
    #[error("Book file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON for the expected schema
    #[error("Book file JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The search pattern is not a valid regular expression
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A loaded record carried an invalid phone or birthday
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
