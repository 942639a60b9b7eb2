//! Domain service for the calculator.
//!
//! Contains the core arithmetic. Integer operands stay integral until a
//! result leaves the `i64` range, at which point the operation is recomputed
//! in `f64`.

use calculator_sdk::Number;
use tracing::debug;

use super::DomainError;
use crate::config::{CalculatorConfig, DivisionMode};

/// Domain service that performs arithmetic operations.
///
/// Stateless apart from its immutable division mode, so a single instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Service {
    division: DivisionMode,
}

impl Service {
    /// Create a new service with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            division: config.division,
        }
    }

    #[must_use]
    pub fn division_mode(&self) -> DivisionMode {
        self.division
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: Number, b: Number) -> Number {
        debug!(%a, %b, "performing addition");
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => integral(x.checked_add(y), a.as_f64() + b.as_f64()),
            _ => Number::Float(a.as_f64() + b.as_f64()),
        }
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: Number, b: Number) -> Number {
        debug!(%a, %b, "performing subtraction");
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => integral(x.checked_sub(y), a.as_f64() - b.as_f64()),
            _ => Number::Float(a.as_f64() - b.as_f64()),
        }
    }

    /// Multiply two numbers and return the product.
    #[must_use]
    pub fn multiply(&self, a: Number, b: Number) -> Number {
        debug!(%a, %b, "performing multiplication");
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => integral(x.checked_mul(y), a.as_f64() * b.as_f64()),
            _ => Number::Float(a.as_f64() * b.as_f64()),
        }
    }

    /// Divide `a` by `b`.
    ///
    /// In [`DivisionMode::Exact`] two integers divide to an integer only when
    /// the division is exact.
    ///
    /// # Errors
    /// Returns `DomainError::DivisionByZero` when `b` is zero.
    pub fn divide(&self, a: Number, b: Number) -> Result<Number, DomainError> {
        debug!(%a, %b, mode = ?self.division, "performing division");
        if b.is_zero() {
            return Err(DomainError::division_by_zero(a));
        }

        let real = a.as_f64() / b.as_f64();
        let quotient = match (self.division, a, b) {
            // `checked_rem` is None only for i64::MIN / -1 here
            (DivisionMode::Exact, Number::Int(x), Number::Int(y)) => match x.checked_rem(y) {
                Some(0) | None => integral(x.checked_div(y), real),
                Some(_) => Number::Float(real),
            },
            _ => Number::Float(real),
        };
        Ok(quotient)
    }
}

fn integral(exact: Option<i64>, promoted: f64) -> Number {
    exact.map_or_else(
        || {
            debug!("integer overflow, promoting to float");
            Number::Float(promoted)
        },
        Number::Int,
    )
}
