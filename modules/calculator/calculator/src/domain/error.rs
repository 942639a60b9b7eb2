//! Domain error types for the calculator module.

use calculator_sdk::{CalculatorError, Number};
use thiserror::Error;

/// Domain-level errors for arithmetic operations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// The divisor was integer or floating zero.
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: Number },
}

impl DomainError {
    #[must_use]
    pub fn division_by_zero(dividend: Number) -> Self {
        Self::DivisionByZero { dividend }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DivisionByZero { .. } => Self::invalid_operation(e.to_string()),
        }
    }
}
