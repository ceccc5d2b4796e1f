//! Gas Station Configuration
//!
//! Controls the third-party gas-price lookups performed by
//! [`GasStationService`](crate::services::GasStationService): whether they run at all,
//! the deadline applied to each request, and the endpoints queried.

use super::ConfigFileError;
use crate::constants::{
    CHAIN_ID_PLACEHOLDER, DEFAULT_GAS_STATION_TIMEOUT_MS, POLYGON_GAS_STATION_URL,
    SUGGESTED_FEES_URL,
};
use serde::{Deserialize, Serialize};

fn default_gas_station_enabled() -> bool {
    true
}

fn default_gas_station_timeout_ms() -> u64 {
    DEFAULT_GAS_STATION_TIMEOUT_MS
}

fn default_polygon_url() -> String {
    POLYGON_GAS_STATION_URL.to_string()
}

fn default_suggested_fees_url() -> String {
    SUGGESTED_FEES_URL.to_string()
}

/// Configuration for third-party fee suggestions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct GasStationConfig {
    /// Query third-party endpoints before falling back to the provider
    #[serde(default = "default_gas_station_enabled")]
    pub enabled: bool,

    /// Deadline for a single third-party request (milliseconds)
    #[serde(default = "default_gas_station_timeout_ms")]
    pub timeout_ms: u64,

    /// Polygon gas-station endpoint
    #[serde(default = "default_polygon_url")]
    pub polygon_url: String,

    /// Suggested-fees endpoint, `{chain_id}` is substituted per request
    #[serde(default = "default_suggested_fees_url")]
    pub suggested_fees_url: String,
}

impl Default for GasStationConfig {
    fn default() -> Self {
        Self {
            enabled: default_gas_station_enabled(),
            timeout_ms: default_gas_station_timeout_ms(),
            polygon_url: default_polygon_url(),
            suggested_fees_url: default_suggested_fees_url(),
        }
    }
}

impl GasStationConfig {
    /// Validates the gas station configuration
    ///
    /// # Returns
    /// - `Ok(())` if the configuration is valid
    /// - `Err(ConfigFileError)` if validation fails
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.timeout_ms == 0 {
            return Err(ConfigFileError::InvalidFormat(
                "Gas station timeout_ms must be greater than zero".into(),
            ));
        }

        if self.polygon_url.trim().is_empty() {
            return Err(ConfigFileError::MissingField("polygon_url".into()));
        }

        if self.suggested_fees_url.trim().is_empty() {
            return Err(ConfigFileError::MissingField("suggested_fees_url".into()));
        }

        if !self.suggested_fees_url.contains(CHAIN_ID_PLACEHOLDER) {
            return Err(ConfigFileError::InvalidFormat(format!(
                "Gas station suggested_fees_url must contain {}",
                CHAIN_ID_PLACEHOLDER
            )));
        }

        Ok(())
    }

    /// Builds the suggested-fees URL for the given chain.
    pub fn suggested_fees_url_for(&self, chain_id: u64) -> String {
        self.suggested_fees_url
            .replace(CHAIN_ID_PLACEHOLDER, &chain_id.to_string())
    }
}
