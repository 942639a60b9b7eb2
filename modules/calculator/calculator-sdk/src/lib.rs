//! Calculator SDK
//!
//! This crate provides the public API for the calculator module:
//!
//! - [`CalculatorClient`] - API trait for consumers
//! - [`Number`] - Operand and result model
//! - [`CalculatorError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Number};
//!
//! let sum = client.add(Number::from(2), Number::from(3));
//! let quotient = client.divide(Number::from(6), Number::from(3))?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::CalculatorClient;
pub use error::CalculatorError;
pub use models::Number;
