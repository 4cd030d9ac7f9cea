//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required column is absent from the expenses file header
    #[error("Expenses file is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// An amount could not be parsed
    #[error("Invalid amount on row {row}: {message}")]
    InvalidAmount { row: usize, message: String },

    /// A sum or difference of amounts does not fit in the money type
    #[error("Amount overflow: {0}")]
    AmountOverflow(&'static str),

    /// The input stream ended while a prompt was waiting for an answer
    #[error("Input closed while waiting for '{0}'")]
    InputClosed(String),
}

impl ExpenseError {
    /// Create an amount error for a given data row (1-indexed, excluding header)
    pub fn invalid_amount(row: usize, message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            row,
            message: message.into(),
        }
    }

    /// Check if this error means the user's input source is exhausted
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_column_display() {
        let err = ExpenseError::MissingColumn("amount");
        assert_eq!(
            err.to_string(),
            "Expenses file is missing required column 'amount'"
        );
    }

    #[test]
    fn test_invalid_amount_display() {
        let err = ExpenseError::invalid_amount(3, "Invalid money format: abc");
        assert_eq!(
            err.to_string(),
            "Invalid amount on row 3: Invalid money format: abc"
        );
    }

    #[test]
    fn test_amount_overflow_display() {
        let err = ExpenseError::AmountOverflow("total spent");
        assert_eq!(err.to_string(), "Amount overflow: total spent");
        assert!(!err.is_input_closed());
    }

    #[test]
    fn test_input_closed() {
        let err = ExpenseError::InputClosed("date".into());
        assert!(err.is_input_closed());
        assert!(!ExpenseError::Io("disk full".into()).is_input_closed());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
