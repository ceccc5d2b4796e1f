//! Configuration for the helpers.
//!
//! Configuration can be loaded from a JSON file or from environment variables
//! (with `.env` support). Every section is validated before it is returned.
mod gas_station;
pub use gas_station::*;

mod poll;
pub use poll::*;

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("File read error: {0}")]
    FileRead(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HelpersConfig {
    #[serde(default)]
    pub gas_station: GasStationConfig,
    #[serde(default)]
    pub poll: PollConfig,
}

impl HelpersConfig {
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        self.gas_station.validate()?;
        self.poll.validate()?;
        Ok(())
    }

    /// Loads and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigFileError::FileRead(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the configuration from environment variables, reading `.env` if present.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigFileError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(enabled) = env_var("GAS_STATION_ENABLED") {
            config.gas_station.enabled = enabled.parse().map_err(|_| {
                ConfigFileError::InvalidFormat(format!(
                    "GAS_STATION_ENABLED must be true or false, got {}",
                    enabled
                ))
            })?;
        }
        if let Some(timeout) = env_var("GAS_STATION_TIMEOUT_MS") {
            config.gas_station.timeout_ms = timeout.parse().map_err(|_| {
                ConfigFileError::InvalidFormat(format!(
                    "GAS_STATION_TIMEOUT_MS must be a number, got {}",
                    timeout
                ))
            })?;
        }
        if let Some(url) = env_var("POLYGON_GAS_STATION_URL") {
            config.gas_station.polygon_url = url;
        }
        if let Some(url) = env_var("SUGGESTED_FEES_URL") {
            config.gas_station.suggested_fees_url = url;
        }

        config.validate()?;
        Ok(config)
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const ENV_VARS: [&str; 4] = [
        "GAS_STATION_ENABLED",
        "GAS_STATION_TIMEOUT_MS",
        "POLYGON_GAS_STATION_URL",
        "SUGGESTED_FEES_URL",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_from_file_success() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"gas_station": {{"timeout_ms": 2000}}, "poll": {{"interval_ms": 250}}}}"#
        )
        .unwrap();

        let config = HelpersConfig::from_file(file.path()).unwrap();
        assert_eq!(config.gas_station.timeout_ms, 2000);
        assert!(config.gas_station.enabled);
        assert_eq!(config.poll.interval_ms, 250);
        assert_eq!(config.poll.timeout_ms, 10_000);
    }

    #[test]
    fn test_from_file_missing() {
        let result = HelpersConfig::from_file("/nonexistent/helpers.json");
        assert!(matches!(result.unwrap_err(), ConfigFileError::FileRead(_)));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = HelpersConfig::from_file(file.path());
        assert!(matches!(result.unwrap_err(), ConfigFileError::JsonError(_)));
    }

    #[test]
    fn test_from_file_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"gas_station": {{"timeout_ms": 0}}}}"#).unwrap();

        let result = HelpersConfig::from_file(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigFileError::InvalidFormat(_)
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = HelpersConfig::from_env().unwrap();
        assert_eq!(config.gas_station, GasStationConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("GAS_STATION_ENABLED", "false");
        env::set_var("GAS_STATION_TIMEOUT_MS", "3000");
        env::set_var("POLYGON_GAS_STATION_URL", "http://localhost:1234/v2");

        let config = HelpersConfig::from_env().unwrap();
        clear_env();

        assert!(!config.gas_station.enabled);
        assert_eq!(config.gas_station.timeout_ms, 3000);
        assert_eq!(config.gas_station.polygon_url, "http://localhost:1234/v2");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        env::set_var("GAS_STATION_TIMEOUT_MS", "soon");

        let result = HelpersConfig::from_env();
        clear_env();

        assert!(matches!(
            result.unwrap_err(),
            ConfigFileError::InvalidFormat(_)
        ));
    }
}
