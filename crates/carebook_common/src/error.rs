// --- File: crates/carebook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Carebook errors.
///
/// Feature crates keep their own error enums and implement
/// `From<SpecificError> for CarebookError` to cross the HTTP boundary.
#[derive(Error, Debug)]
pub enum CarebookError {
    /// Error occurred while parsing request data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CarebookError {
    fn status_code(&self) -> u16 {
        match self {
            CarebookError::ParseError(_) => 400,
            CarebookError::ConfigError(_) => 500,
            CarebookError::ValidationError(_) => 422,
            CarebookError::NotFoundError(_) => 404,
            CarebookError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, CarebookError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, CarebookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, CarebookError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| CarebookError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, CarebookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| CarebookError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<std::io::Error> for CarebookError {
    fn from(err: std::io::Error) -> Self {
        CarebookError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn parse_error<T: fmt::Display>(message: T) -> CarebookError {
    CarebookError::ParseError(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> CarebookError {
    CarebookError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> CarebookError {
    CarebookError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CarebookError {
    CarebookError::NotFoundError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(parse_error("bad date").status_code(), 400);
        assert_eq!(not_found("provider 9").status_code(), 404);
        assert_eq!(validation_error("x").status_code(), 422);
        assert_eq!(config_error("tz").status_code(), 500);
        assert_eq!(CarebookError::InternalError("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_context_wraps_foreign_error() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let err = result.context("rendering page").unwrap_err();

        assert_eq!(err.to_string(), "Internal error: rendering page: disk");
    }
}
