//! Domain layer for the calculator module.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::CalculatorLocalClient;
pub use service::Service;
