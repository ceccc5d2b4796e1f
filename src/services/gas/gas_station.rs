//! Fee data with third-party suggestions.
//!
//! For chains with a known gas station the EIP-1559 fields come from that
//! station; otherwise, or if the station fails or times out, they come from
//! the provider. The legacy gas price always comes from the provider.

use super::fee_oracle::{fee_oracle_factory, FeeOracle, GasStationError, GasStationTier};
use crate::{
    config::GasStationConfig,
    models::{FeeData, ProviderError},
    services::EvmProviderTrait,
    utils::with_deadline,
};
use log::{debug, warn};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GasStationService {
    client: reqwest::Client,
    config: GasStationConfig,
}

impl GasStationService {
    pub fn new(config: GasStationConfig) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: GasStationConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    /// Returns fee data for the provider's chain.
    ///
    /// Only provider errors are returned; gas station failures fall back to the
    /// provider's own fee data.
    pub async fn get_fee_data<P>(&self, provider: &P) -> Result<FeeData, ProviderError>
    where
        P: EvmProviderTrait + ?Sized,
    {
        let chain_id = provider.get_chain_id().await?;
        let (suggestion, native) = tokio::try_join!(
            async { Ok::<_, ProviderError>(self.suggest(chain_id).await) },
            provider.get_fee_data()
        )?;

        Ok(match suggestion {
            Some(tier) => FeeData {
                max_priority_fee_per_gas: Some(tier.max_priority_fee),
                max_fee_per_gas: Some(tier.max_fee),
                gas_price: native.gas_price,
            },
            None => native,
        })
    }

    async fn suggest(&self, chain_id: u64) -> Option<GasStationTier> {
        if !self.config.enabled {
            return None;
        }
        let oracle = fee_oracle_factory(chain_id)?;

        match self.fetch_suggestion(oracle, chain_id).await {
            Ok(tier) => {
                debug!("Gas station suggestion for chain {}: {:?}", chain_id, tier);
                Some(tier)
            }
            Err(err) => {
                warn!(
                    "Gas station lookup for chain {} failed, using provider fee data: {}",
                    chain_id, err
                );
                None
            }
        }
    }

    /// Queries `oracle` for `chain_id`, bounded by the configured timeout.
    ///
    /// The request is cancelled when the timeout elapses.
    pub async fn fetch_suggestion(
        &self,
        oracle: FeeOracle,
        chain_id: u64,
    ) -> Result<GasStationTier, GasStationError> {
        let url = oracle.url(&self.config, chain_id);
        let timeout = Duration::from_millis(self.config.timeout_ms);

        let body = with_deadline(&url, timeout, self.fetch_json(&url)).await??;
        oracle.parse_tier(&body)
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, GasStationError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GasStationError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Value>().await?)
    }
}

impl Default for GasStationService {
    fn default() -> Self {
        Self::new(GasStationConfig::default())
    }
}
