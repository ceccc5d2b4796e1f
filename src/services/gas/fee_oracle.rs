//! Third-party fee oracles.
//!
//! Some chains have public gas stations that track the fee market better than
//! the node's own suggestion. This module knows which oracle serves which
//! chain and how to read its response.
//!
//! Currently supports:
//! - Polygon: the Polygon gas station, `standard` tier
//! - Ethereum mainnet and Arbitrum One: the suggested-fees API, `medium` tier
use crate::{
    config::GasStationConfig,
    constants::{
        ARBITRUM_ONE_CHAIN_ID, ETHEREUM_MAINNET_CHAIN_ID, GWEI_DECIMALS, POLYGON_CHAIN_ID,
        WEI_PER_GWEI,
    },
    models::U256,
    utils::DeadlineError,
};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GasStationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gas station {url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("Gas station response is missing {0}")]
    MissingField(String),
    #[error("Invalid gwei amount: {0}")]
    InvalidAmount(String),
    #[error(transparent)]
    Timeout(#[from] DeadlineError),
}

/// Suggested fees for one tier, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasStationTier {
    pub max_priority_fee: U256,
    pub max_fee: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeOracle {
    Polygon,
    SuggestedFees,
}

impl FeeOracle {
    /// Endpoint to query for `chain_id`.
    pub fn url(&self, config: &GasStationConfig, chain_id: u64) -> String {
        match self {
            FeeOracle::Polygon => config.polygon_url.clone(),
            FeeOracle::SuggestedFees => config.suggested_fees_url_for(chain_id),
        }
    }

    fn fields(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            FeeOracle::Polygon => ("standard", "maxPriorityFee", "maxFee"),
            FeeOracle::SuggestedFees => (
                "medium",
                "suggestedMaxPriorityFeePerGas",
                "suggestedMaxFeePerGas",
            ),
        }
    }

    /// Reads the oracle's tier out of a response body.
    pub fn parse_tier(&self, body: &Value) -> Result<GasStationTier, GasStationError> {
        let (tier_name, priority_field, max_field) = self.fields();
        let tier = body
            .get(tier_name)
            .ok_or_else(|| GasStationError::MissingField(tier_name.to_string()))?;

        let read = |field: &str| -> Result<U256, GasStationError> {
            let value = tier
                .get(field)
                .ok_or_else(|| GasStationError::MissingField(format!("{}.{}", tier_name, field)))?;
            convert_gwei_to_wei(&gwei_text(value)?)
        };

        Ok(GasStationTier {
            max_priority_fee: read(priority_field)?,
            max_fee: read(max_field)?,
        })
    }
}

/// Creates the fee oracle serving `chain_id`, if there is one.
pub fn fee_oracle_factory(chain_id: u64) -> Option<FeeOracle> {
    match chain_id {
        POLYGON_CHAIN_ID => Some(FeeOracle::Polygon),
        ETHEREUM_MAINNET_CHAIN_ID | ARBITRUM_ONE_CHAIN_ID => Some(FeeOracle::SuggestedFees),
        _ => None,
    }
}

fn gwei_text(value: &Value) -> Result<String, GasStationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(GasStationError::InvalidAmount(other.to_string())),
    }
}

/// Converts a decimal gwei amount to wei, truncating below one wei.
///
/// `"30.5"` becomes `30_500_000_000`.
pub fn convert_gwei_to_wei(gwei: &str) -> Result<U256, GasStationError> {
    let gwei = gwei.trim();
    let invalid = || GasStationError::InvalidAmount(gwei.to_string());

    if gwei.contains(['e', 'E']) {
        let value: f64 = gwei.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        return Ok(U256::from((value * WEI_PER_GWEI as f64).trunc() as u128));
    }

    let (whole, fraction) = gwei.split_once('.').unwrap_or((gwei, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10).map_err(|_| invalid())?
    };
    let fraction: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(GWEI_DECIMALS)
        .collect();
    let fraction = U256::from_str_radix(&fraction, 10).map_err(|_| invalid())?;

    whole
        .checked_mul(U256::from(WEI_PER_GWEI))
        .and_then(|wei| wei.checked_add(fraction))
        .ok_or_else(invalid)
}
