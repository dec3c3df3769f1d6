//! Core error types for the fintrack client.
//!
//! This module defines transport-agnostic error types. HTTP-specific failures
//! (reqwest, status codes, body decoding) are converted to these types by the
//! connect layer before they reach a controller.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::forms::FieldErrors;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client.
///
/// Every user action maps to one of these outcomes on failure. Controllers
/// surface them as notifications and never retry.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Backend request failed: {0}")]
    Api(#[from] ApiError),

    #[error("No user is logged in")]
    NotAuthenticated,

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("A request is already in progress")]
    Busy,

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the remote data-access layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON for the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A list response did not carry any recognised list field.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl ApiError {
    /// HTTP status of the failed call, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Please correct the highlighted errors. {0}")]
    Fields(FieldErrors),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

impl Error {
    /// Field-level errors if this is a blocked form submission.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Error::Validation(ValidationError::Fields(fields)) => Some(fields),
            _ => None,
        }
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Api(ApiError::Decode(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Session(err.to_string())
    }
}

impl From<FieldErrors> for Error {
    fn from(fields: FieldErrors) -> Self {
        Error::Validation(ValidationError::Fields(fields))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
