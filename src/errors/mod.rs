//! Error handling module for the roster application.
//!
//! Provides centralized error types with stable error codes.
//!
//! Field validation failures are deliberately not represented here: they are
//! the expected outcome of a form submit and travel as
//! [`crate::form::ValidationErrors`].

use std::io;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const UNKNOWN_FIELD: &str = "UNKNOWN_FIELD";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Terminal I/O failed
    Io(String),
    /// No member at the addressed position
    NotFound(String),
    /// A form field key that is not part of the member schema
    UnknownField(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Io(_) => codes::IO_ERROR,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::UnknownField(_) => codes::UNKNOWN_FIELD,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Io(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::UnknownField(field) => format!("Unknown form field '{}'", field),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        AppError::Io(format!("I/O error: {}", err))
    }
}
