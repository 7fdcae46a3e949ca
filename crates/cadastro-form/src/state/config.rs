//! # Form Configuration
//!
//! Settings for the submission flow.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CADASTRO_*`)
//! 2. Config file (`cadastro.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! # cadastro.toml
//! submit_delay_ms = 1000
//! simulate_failure = false
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::submit::MockSubmitter;

/// Overrides `submit_delay_ms`.
pub const ENV_SUBMIT_DELAY_MS: &str = "CADASTRO_SUBMIT_DELAY_MS";

/// Overrides `simulate_failure`.
pub const ENV_SIMULATE_FAILURE: &str = "CADASTRO_SIMULATE_FAILURE";

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated request latency in milliseconds.
    pub submit_delay_ms: u64,

    /// Make the mock backend fail every submission.
    pub simulate_failure: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            submit_delay_ms: 1000,
            simulate_failure: false,
        }
    }
}

impl FormConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, when `path` is given and exists
    /// 3. Environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading form config from file");
                config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env()?;
        Ok(config)
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `CADASTRO_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SUBMIT_DELAY_MS) {
            self.submit_delay_ms = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SUBMIT_DELAY_MS.to_string(),
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_SIMULATE_FAILURE) {
            self.simulate_failure = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_SIMULATE_FAILURE.to_string(),
                        value,
                    })
                }
            };
        }

        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Builds the mock backend described by this config.
    pub fn mock_submitter(&self) -> MockSubmitter {
        if self.simulate_failure {
            MockSubmitter::failing(self.submit_delay())
        } else {
            MockSubmitter::new(self.submit_delay())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
        assert!(!config.simulate_failure);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = FormConfig::from_toml_str("submit_delay_ms = 250").unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert!(!config.simulate_failure);

        assert!(matches!(
            FormConfig::from_toml_str("submit_delay_ms = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = FormConfig::default();
        config
            .apply_overrides(lookup(&[
                (ENV_SUBMIT_DELAY_MS, "50"),
                (ENV_SIMULATE_FAILURE, "TRUE"),
            ]))
            .unwrap();

        assert_eq!(config.submit_delay_ms, 50);
        assert!(config.simulate_failure);
        assert_eq!(config.mock_submitter().delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_invalid_override() {
        let mut config = FormConfig::default();
        let err = config
            .apply_overrides(lookup(&[(ENV_SUBMIT_DELAY_MS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = config
            .apply_overrides(lookup(&[(ENV_SIMULATE_FAILURE, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("cadastro-{}.toml", std::process::id()));
        std::fs::write(&path, "simulate_failure = true\n").unwrap();

        let config = FormConfig::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(config.simulate_failure);
    }

    #[test]
    fn test_load_missing_file_is_not_an_error() {
        assert!(FormConfig::load(Some(Path::new("/nonexistent/cadastro.toml"))).is_ok());
    }
}
