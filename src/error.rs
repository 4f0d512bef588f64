//! Error types for the rolo address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while operating on the address book.
///
/// Every variant is terminal for the single command that raised it; the
/// command loop formats it into a message and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value object rejected its input (bad phone or date text)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact exists under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The phone number to edit is not on the record
    #[error("Old phone not found")]
    PhoneNotFound(String),

    /// The record already has a birthday
    #[error("Birthday already exists for this contact.")]
    BirthdayAlreadySet(String),

    /// Too few tokens were supplied to a command
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: John");

        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Old phone not found");

        let err = BookError::BirthdayAlreadySet("John".to_string());
        assert_eq!(err.to_string(), "Birthday already exists for this contact.");

        let err = BookError::MissingArgument("NAME");
        assert_eq!(err.to_string(), "Missing argument: NAME");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let err: BookError = ValidationError::InvalidPhone("abc".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid phone number format. Use +XXXXXXXXXXX"
        );

        let err: BookError = ValidationError::InvalidDate("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }
}
