//! Error types for the calculator module.

use thiserror::Error;

/// Errors returned by the calculator API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The operation is mathematically undefined for the given operands.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Human-readable description of what was attempted.
        message: String,
    },
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}
