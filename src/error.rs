//! Custom error types for budget-analysis
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for budget-analysis operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A prompt reply could not be read as a decimal amount
    #[error("Invalid number format: '{input}'")]
    InvalidNumberFormat { input: String },

    /// A numeric prompt was closed without an answer
    #[error("Prompt dismissed without an answer: {prompt}")]
    Dismissed { prompt: String },

    /// The running total left the representable range
    #[error("Amount overflow while adding {amount} to {total}")]
    Overflow { total: String, amount: String },

    /// The session was driven out of order
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Create an invalid number error for the given raw reply
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumberFormat {
            input: input.into(),
        }
    }

    /// Create a dismissed error for the given prompt text
    pub fn dismissed(prompt: impl Into<String>) -> Self {
        Self::Dismissed {
            prompt: prompt.into(),
        }
    }

    /// Check if this is an invalid number error
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, Self::InvalidNumberFormat { .. })
    }

    /// Check if this is a dismissed prompt
    pub fn is_dismissed(&self) -> bool {
        matches!(self, Self::Dismissed { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for BudgetError {
    fn from(err: MoneyParseError) -> Self {
        match err {
            MoneyParseError::InvalidFormat(input) => Self::InvalidNumberFormat { input },
        }
    }
}

/// Result type alias for budget-analysis operations
pub type BudgetResult<T> = Result<T, BudgetError>;
