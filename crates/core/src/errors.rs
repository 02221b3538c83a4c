//! Core error types for the Cashtrack ledger.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! failures are converted into these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger.
///
/// Storage-specific errors are carried in string form so the type stays
/// backend-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error is the store's record-not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound(_)))
    }
}

/// Storage-agnostic error type for Ledger Store operations.
///
/// All details are `String` so any backend (in-memory, SQL, remote) can
/// convert its own error types into this format. The aggregation engine
/// propagates these unchanged and never retries.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (timeout, connection loss).
    #[error("Ledger store unavailable: {0}")]
    Unavailable(String),

    /// A store query failed to execute.
    #[error("Ledger store query failed: {0}")]
    QueryFailed(String),

    /// The requested record or record owner was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected store error.
    #[error("Internal ledger store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    /// The supplied year/month does not resolve to a calendar month.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
