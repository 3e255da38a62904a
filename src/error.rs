//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating, decoding or persisting contacts.
#[derive(Error, Debug)]
pub enum ContactError {
    /// First, last or middle name failed the name rule
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Email failed the `local@domain.tld` rule
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// No phone number survived parsing
    #[error("No valid phone numbers in {0:?}")]
    InvalidPhoneSet(String),

    /// Birth date is unparseable or later than today
    #[error("Invalid birth date: {0:?}")]
    InvalidDate(String),

    /// A CSV line had fewer than seven comma-separated fields
    #[error("Incomplete fields at line {line}")]
    IncompleteCsvLine { line: usize },

    /// A line of the contact file is not valid UTF-8
    #[error("Invalid text encoding at line {line}")]
    InvalidEncoding { line: usize },

    /// No record at the given table row
    #[error("No contact at row {row}")]
    NoSuchRow { row: usize },

    /// A contact file could not be opened for reading or writing
    #[error("Failed to open file {}: {source}", path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContactError {
    /// Whether this error concerns a single field value (as opposed to a file or line).
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidName(_)
                | Self::InvalidEmail(_)
                | Self::InvalidPhoneSet(_)
                | Self::InvalidDate(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
