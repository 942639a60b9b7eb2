#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for calculator integration tests

use std::sync::Arc;

use calculator::{CalculatorConfig, CalculatorLocalClient, DivisionMode, Service};
use calculator_sdk::{CalculatorClient, Number};

/// Relative tolerance for floating-point round trips.
pub const TOLERANCE: f64 = 1e-9;

pub fn create_client() -> Arc<dyn CalculatorClient> {
    Arc::new(CalculatorLocalClient::new(Arc::new(Service::new())))
}

pub fn create_client_with_division(division: DivisionMode) -> Arc<dyn CalculatorClient> {
    let config = CalculatorConfig { division };
    Arc::new(CalculatorLocalClient::new(Arc::new(Service::with_config(
        &config,
    ))))
}

/// One client per configurable division mode.
pub fn all_clients() -> Vec<(DivisionMode, Arc<dyn CalculatorClient>)> {
    [DivisionMode::Exact, DivisionMode::Real]
        .into_iter()
        .map(|mode| (mode, create_client_with_division(mode)))
        .collect()
}

/// Operand grid covering signs, zero, integers, reals and large magnitudes.
pub fn sample_operands() -> Vec<Number> {
    vec![
        Number::Int(0),
        Number::Int(1),
        Number::Int(-1),
        Number::Int(2),
        Number::Int(-7),
        Number::Int(1_000_003),
        Number::Int(i64::MAX),
        Number::Int(i64::MIN),
        Number::Float(0.0),
        Number::Float(0.5),
        Number::Float(-2.25),
        Number::Float(1.234_567_89),
        Number::Float(1e-12),
        Number::Float(-1.5e10),
    ]
}

pub fn approx_eq(actual: Number, expected: Number) -> bool {
    let (a, e) = (actual.as_f64(), expected.as_f64());
    (a - e).abs() <= TOLERANCE * e.abs().max(1.0)
}
