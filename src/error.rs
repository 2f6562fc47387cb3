//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can hit before it has a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A multi-argument command got the wrong number of arguments
    #[error("Expected {expected} arguments, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },

    /// A single-argument command got none
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// No contact is stored under the name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

impl CommandError {
    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyName) => "Enter user name.",
            Self::Validation(_) | Self::WrongArgumentCount { .. } => {
                "Give me name and phone please."
            }
            Self::MissingArgument(_) => "Invalid command.",
            Self::ContactNotFound(_) => "Contact not found.",
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

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
