//! Domain errors for the order store.

use std::fmt;

/// Domain-level errors that can occur in validation and conversion.
///
/// These errors are independent of storage concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A required column is missing or blank on a persisted row.
    IncompleteRow {
        /// Column name.
        column: String,
        /// Row key of the offending row.
        row_key: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::IncompleteRow { column, row_key } => {
                write!(f, "Row '{row_key}' is missing required column '{column}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
