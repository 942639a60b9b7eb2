//! Calculator Module
//!
//! A stateless arithmetic evaluator exposing addition, subtraction,
//! multiplication and division over [`calculator_sdk::Number`] operands.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic
//! - `domain/local_client.rs` - In-process `CalculatorClient` implementation
//! - `config.rs` - Typed configuration (division mode)
//!
//! Consumers should program against `calculator_sdk::CalculatorClient`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{CalculatorConfig, ConfigError, DivisionMode};
pub use domain::{CalculatorLocalClient, DomainError, Service};
