//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::error::CalculatorError;
use crate::models::Number;

/// Calculator API trait
///
/// Four binary arithmetic operations over [`Number`] operands. Only
/// division can fail.
pub trait CalculatorClient: Send + Sync {
    /// Add two numbers and return the sum.
    #[must_use]
    fn add(&self, a: Number, b: Number) -> Number;

    /// Subtract `b` from `a`.
    #[must_use]
    fn subtract(&self, a: Number, b: Number) -> Number;

    /// Multiply two numbers and return the product.
    #[must_use]
    fn multiply(&self, a: Number, b: Number) -> Number;

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperation`] when `b` is zero.
    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;
}
