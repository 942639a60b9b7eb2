//! Configuration for the calculator module.
//!
//! The module reads its `calculator` section from a layered [`Figment`]:
//! an optional YAML file first, then `APP__`-prefixed environment variables
//! (`APP__CALCULATOR__DIVISION=real`). A missing section yields defaults.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

/// Name of the configuration section owned by this module.
pub const CONFIG_SECTION: &str = "calculator";

/// Prefix for environment overrides. Nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "APP__";

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: Box<figment::Error>,
    },
}

/// Representation of a quotient of two integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMode {
    /// Integral when the division is exact, real otherwise.
    #[default]
    Exact,
    /// Always real, even for `6 / 3`.
    Real,
}

/// Module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// How `Int / Int` quotients are represented.
    pub division: DivisionMode,
}

impl CalculatorConfig {
    /// Load configuration from an optional YAML file overlaid with environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the merged `calculator` section cannot be deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// Extract the `calculator` section, falling back to defaults when it is absent.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the section exists but is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        if !figment.contains(CONFIG_SECTION) {
            tracing::debug!(section = CONFIG_SECTION, "config section missing, using defaults");
            return Ok(Self::default());
        }

        figment
            .extract_inner(CONFIG_SECTION)
            .map_err(|e| ConfigError::InvalidConfig {
                module: CONFIG_SECTION.to_owned(),
                source: Box::new(e),
            })
    }
}
