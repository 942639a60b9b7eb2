#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Algebraic properties checked over a fixed operand grid, in every division mode

mod common;

use calculator_sdk::{CalculatorError, Number};
use common::{all_clients, approx_eq, sample_operands};

#[test]
fn test_add_is_commutative() {
    let operands = sample_operands();

    for (mode, calculator) in all_clients() {
        for &a in &operands {
            for &b in &operands {
                assert_eq!(
                    calculator.add(a, b),
                    calculator.add(b, a),
                    "mode={mode:?}, a={a}, b={b}"
                );
            }
        }
    }
}

#[test]
fn test_subtract_is_antisymmetric() {
    let operands = sample_operands();

    for (mode, calculator) in all_clients() {
        for &a in &operands {
            for &b in &operands {
                let forward = calculator.subtract(a, b);
                let backward = calculator.subtract(b, a);
                assert_eq!(forward, -backward, "mode={mode:?}, a={a}, b={b}");
            }
        }
    }
}

#[test]
fn test_zero_is_identity() {
    for (mode, calculator) in all_clients() {
        for a in sample_operands() {
            assert_eq!(calculator.add(a, Number::Int(0)), a, "mode={mode:?}, a={a}");
            assert_eq!(calculator.subtract(a, Number::Int(0)), a, "mode={mode:?}, a={a}");
        }
    }
}

#[test]
fn test_divide_then_multiply_round_trips() {
    let operands = sample_operands();

    for (mode, calculator) in all_clients() {
        for &a in &operands {
            for &b in operands.iter().filter(|b| !b.is_zero()) {
                let quotient = calculator.divide(a, b).unwrap();
                let product = calculator.multiply(quotient, b);
                assert!(
                    approx_eq(product, a),
                    "mode={mode:?}, a={a}, b={b}, quotient={quotient}, product={product}"
                );
            }
        }
    }
}

#[test]
fn test_divide_by_zero_always_fails() {
    for (mode, calculator) in all_clients() {
        for a in sample_operands() {
            for zero in [Number::Int(0), Number::Float(0.0), Number::Float(-0.0)] {
                let result = calculator.divide(a, zero);
                assert!(
                    matches!(result, Err(CalculatorError::InvalidOperation { .. })),
                    "mode={mode:?}, a={a}, b={zero}"
                );
            }
        }
    }
}

#[test]
fn test_operations_are_deterministic() {
    let operands = sample_operands();

    for (_, calculator) in all_clients() {
        for &a in &operands {
            for &b in &operands {
                assert_eq!(calculator.multiply(a, b), calculator.multiply(a, b));
                if !b.is_zero() {
                    assert_eq!(calculator.divide(a, b), calculator.divide(a, b));
                }
            }
        }
    }
}
