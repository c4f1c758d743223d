//! # Error Types
//!
//! Structured error types for calc_core. Every calculator reports failure through
//! [`CalcError`] as part of its return value; nothing panics and nothing escapes a
//! single calculation call.
//!
//! The three user-facing kinds stay distinct so callers (and tests) can tell them
//! apart:
//!
//! - [`CalcError::InvalidInput`] - a numeric field or mode label could not be used
//! - [`CalcError::InvalidDate`] - the age calculator got a malformed date
//! - [`CalcError::DomainError`] - the math is undefined for the given values
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_sqrt(value: f64) -> CalcResult<f64> {
//!     if value < 0.0 {
//!         return Err(CalcError::domain_error(
//!             "sqrt",
//!             value.to_string(),
//!             "Square root of a negative number",
//!         ));
//!     }
//!     Ok(value.sqrt())
//! }
//!
//! assert_eq!(checked_sqrt(-1.0).unwrap_err().error_code(), "DOMAIN_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric field failed to parse, a mode label is unknown, or the
    /// request carried the wrong number of inputs
    #[error("Invalid input for '{field}': '{value}' - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The date string is not a real `YYYY-MM-DD` calendar date
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// The operation is mathematically undefined for the given value
    #[error("Domain error in {operation}: {value} - {reason}")]
    DomainError {
        operation: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DomainError
    pub fn domain_error(operation: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            operation: operation.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidDate { .. } => "INVALID_DATE",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
        }
    }

    /// Short message shown in place of a result on a calculator screen.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InvalidInput { .. } => "Invalid input.".to_string(),
            CalcError::InvalidDate { .. } => "Invalid date format.".to_string(),
            CalcError::DomainError { operation, reason, .. } => {
                format!("Math error ({}): {}.", operation, reason)
            }
        }
    }
}
