//! Local (in-process) client for the calculator module.

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError, Number};

use super::{DomainError, Service};

/// Local client wrapping the calculator service.
///
/// This client is thread-safe and can be shared across multiple threads.
#[derive(Debug, Clone)]
pub struct CalculatorLocalClient {
    svc: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> CalculatorError {
    tracing::warn!(operation = op, error = %e, "calculator call failed");
    e.into()
}

impl CalculatorClient for CalculatorLocalClient {
    fn add(&self, a: Number, b: Number) -> Number {
        self.svc.add(a, b)
    }

    fn subtract(&self, a: Number, b: Number) -> Number {
        self.svc.subtract(a, b)
    }

    fn multiply(&self, a: Number, b: Number) -> Number {
        self.svc.multiply(a, b)
    }

    fn divide(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.svc
            .divide(a, b)
            .map_err(|e| log_and_convert("divide", e))
    }
}
