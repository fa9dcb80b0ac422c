//! Custom error types for the expense manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant carries enough context to be
//! shown to the user as a single titled notification.

use thiserror::Error;

/// The main error type for expense manager operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Empty field or non-positive amount
    #[error("Validation error: {0}")]
    Validation(String),

    /// Amount text that is not a number
    #[error("Invalid number: {0}")]
    NumberFormat(String),

    /// Update or delete attempted with nothing selected
    #[error("No selection: {0}")]
    NoSelection(String),

    /// Writing the expense file failed
    #[error("File error: {0}")]
    FileIo(String),

    /// The expense file could not be loaded; line 0 means the file as a whole
    #[error("File format error at line {line}: {message}")]
    FileFormat { line: usize, message: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the expense file (settings, audit log)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Short title used when the error is shown as an alert
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Input Error",
            Self::NumberFormat(_) => "Invalid Input",
            Self::NoSelection(_) => "No Selection",
            Self::FileIo(_) | Self::FileFormat { .. } => "File Error",
            Self::NotFound { .. } => "Not Found",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Json(_) => "Data Error",
            Self::Tui(_) => "Display Error",
        }
    }

    /// Message body used when the error is shown as an alert
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::NumberFormat(msg)
            | Self::NoSelection(msg)
            | Self::FileIo(msg)
            | Self::Config(msg)
            | Self::Io(msg)
            | Self::Json(msg)
            | Self::Tui(msg) => msg.clone(),
            Self::FileFormat { line: 0, message } => message.clone(),
            Self::FileFormat { line, message } => format!("Line {}: {}", line, message),
            Self::NotFound {
                entity_type,
                identifier,
            } => format!("{} '{}' does not exist", entity_type, identifier),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from reading or writing the expense file
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::FileIo(_) | Self::FileFormat { .. })
    }
}

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

/// Result type alias for expense manager operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Validation("Please fill all fields".into());
        assert_eq!(err.to_string(), "Validation error: Please fill all fields");
    }

    #[test]
    fn test_file_format_error() {
        let err = ExpenseError::FileFormat {
            line: 3,
            message: "missing category".into(),
        };
        assert_eq!(err.to_string(), "File format error at line 3: missing category");
        assert_eq!(err.message(), "Line 3: missing category");
        assert!(err.is_file_error());

        let whole_file = ExpenseError::FileFormat {
            line: 0,
            message: "stream did not contain valid UTF-8".into(),
        };
        assert_eq!(whole_file.message(), "stream did not contain valid UTF-8");
    }

    #[test]
    fn test_titles() {
        assert_eq!(ExpenseError::NoSelection("x".into()).title(), "No Selection");
        assert_eq!(ExpenseError::NumberFormat("x".into()).title(), "Invalid Input");
        assert_eq!(ExpenseError::FileIo("x".into()).title(), "File Error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_not_found("exp-12345678");
        assert_eq!(err.to_string(), "Expense not found: exp-12345678");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
