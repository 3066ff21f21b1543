//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur around the payroll core: configuration
//! loading, console input and employee-type parsing. The core itself (ledger
//! edits and pay calculation) never fails.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::UnknownEmployeeType {
///     label: "contractor".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee type: contractor");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee-type label did not name a known variant.
    #[error("Unknown employee type: {label}")]
    UnknownEmployeeType {
        /// The label as entered.
        label: String,
    },

    /// A value entered for a field could not be used.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field being entered.
        field: String,
        /// A description of what was wrong.
        message: String,
    },

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed {
        /// The prompt that was left unanswered.
        prompt: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {message}")]
    Io {
        /// The underlying I/O error message.
        message: String,
    },
}

impl From<std::io::Error> for PayrollError {
    fn from(error: std::io::Error) -> Self {
        PayrollError::Io {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
