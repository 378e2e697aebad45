//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book operations and command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value object rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A command was called without its required arguments
    #[error("{0}")]
    MissingArguments(String),

    /// A referenced contact or phone does not exist
    #[error("{0}")]
    NotFound(String),
}

impl BookError {
    /// The category name shown to the user in front of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::MissingArguments(_) => "ValidationError",
            Self::NotFound(_) => "NotFoundError",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
