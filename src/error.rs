//! Custom error types for Smart Expense
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Smart Expense operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A field in the dataset could not be parsed
    #[error("Parse error on row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required column is missing from the dataset header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// External service failures
    #[error("{service} error: {message}")]
    Integration {
        service: &'static str,
        message: String,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Create a parse error for a dataset row
    pub fn parse(row: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            row,
            message: message.into(),
        }
    }

    /// Create an error for the generative text service
    pub fn gemini(message: impl Into<String>) -> Self {
        Self::Integration {
            service: "Gemini",
            message: message.into(),
        }
    }

    /// Create an error for the spreadsheet service
    pub fn sheets(message: impl Into<String>) -> Self {
        Self::Integration {
            service: "Google Sheets",
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from an external service
    pub fn is_integration(&self) -> bool {
        matches!(self, Self::Integration { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Smart Expense operations
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
    fn test_parse_error() {
        let err = ExpenseError::parse(4, "bad date '31-31-2025'");
        assert_eq!(err.to_string(), "Parse error on row 4: bad date '31-31-2025'");
    }

    #[test]
    fn test_integration_error() {
        let err = ExpenseError::sheets("spreadsheet not found: My Expenses");
        assert_eq!(
            err.to_string(),
            "Google Sheets error: spreadsheet not found: My Expenses"
        );
        assert!(err.is_integration());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
