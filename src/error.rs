//! Custom error types for the expense ledger
//!
//! Validation failures from the ledger are ordinary, recoverable values:
//! the interactive session reports them and lets the user try again.

use thiserror::Error;

use crate::models::Money;

/// The main error type for expense ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Date text is malformed or names a day that does not exist
    #[error("Invalid date '{0}'. Please use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Expense amounts must be strictly positive
    #[error("Amount must be positive, got {0}.")]
    InvalidAmount(Money),

    /// Recording the amount would overflow the ledger total
    #[error("Amount {0} is too large for this ledger.")]
    AmountTooLarge(Money),

    /// Category is required when recording an expense
    #[error("Category cannot be empty.")]
    EmptyCategory,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl LedgerError {
    /// Check if this error came from validating an expense
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidAmount(_)
                | Self::AmountTooLarge(_)
                | Self::EmptyCategory
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
