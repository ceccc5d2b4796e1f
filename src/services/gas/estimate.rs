//! Padded gas limits.
//!
//! A raw `eth_estimateGas` result is tight: a transaction taking a slightly
//! different path at inclusion time can run out of gas. The estimate is padded
//! by 50%, but never past 90% of the block gas limit.

use crate::{
    constants::{BLOCK_GAS_LIMIT_CEILING_PERCENT, GAS_ESTIMATE_PADDING_PERCENT},
    models::{GasEstimate, ProviderError, U256},
    services::EvmProviderTrait,
};
use alloy::rpc::types::TransactionRequest;
use log::debug;

/// Applies the padding policy to a raw estimate.
pub fn expand_gas_estimate(block_gas_limit: U256, estimate: U256) -> GasEstimate {
    let ceiling = block_gas_limit * U256::from(BLOCK_GAS_LIMIT_CEILING_PERCENT) / U256::from(100);
    let padded = estimate * U256::from(GAS_ESTIMATE_PADDING_PERCENT) / U256::from(100);

    let expanded_gas = if estimate > ceiling {
        estimate
    } else if padded < ceiling {
        padded
    } else {
        ceiling
    };

    GasEstimate {
        expanded_gas,
        gas: estimate,
    }
}

/// Estimates `tx` and pads the result against the latest block gas limit.
pub async fn estimate_gas<P>(provider: &P, tx: &TransactionRequest) -> Result<GasEstimate, ProviderError>
where
    P: EvmProviderTrait + ?Sized,
{
    let block = provider.get_latest_block().await?;
    let estimate = provider.estimate_gas(tx).await?;

    let result = expand_gas_estimate(U256::from(block.gas_limit), U256::from(estimate));
    debug!(
        "gas estimate {} expanded to {} (block {} gas limit {})",
        result.gas, result.expanded_gas, block.number, block.gas_limit
    );
    Ok(result)
}
