//! EVM JSON-RPC provider.
//!
//! [`EvmProviderTrait`] is the seam every helper goes through; [`EvmProvider`]
//! implements it over an alloy HTTP provider.

use crate::{
    constants::DEFAULT_MAX_PRIORITY_FEE_PER_GAS,
    models::{BlockSummary, FeeData, ProviderError, RpcError, U256},
};
use alloy::{
    network::Ethereum,
    primitives::Bytes,
    providers::{Provider, RootProvider},
    rpc::types::{BlockNumberOrTag, TransactionRequest},
    transports::{RpcError as TransportRpcError, TransportErrorKind},
};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait EvmProviderTrait: Send + Sync {
    /// Identifies the endpoint behind this provider.
    fn rpc_url(&self) -> String;

    /// Sends an arbitrary JSON-RPC request.
    async fn raw_request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Fetches the latest block.
    async fn get_latest_block(&self) -> Result<BlockSummary, ProviderError>;

    /// Estimates the gas a transaction consumes.
    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, ProviderError>;

    /// Executes a transaction without submitting it.
    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError>;

    /// Returns the node's own fee suggestion.
    async fn get_fee_data(&self) -> Result<FeeData, ProviderError>;

    async fn get_chain_id(&self) -> Result<u64, ProviderError>;
}

impl From<TransportRpcError<TransportErrorKind>> for ProviderError {
    fn from(err: TransportRpcError<TransportErrorKind>) -> Self {
        match err {
            TransportRpcError::ErrorResp(payload) => ProviderError::Rpc(RpcError {
                code: payload.code,
                message: payload.message.to_string(),
                data: payload
                    .data
                    .as_ref()
                    .and_then(|raw| serde_json::from_str(raw.get()).ok()),
            }),
            TransportRpcError::Transport(kind) => ProviderError::Transport(kind.to_string()),
            other => ProviderError::Other(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct EvmProvider {
    provider: RootProvider<Ethereum>,
    url: String,
}

impl EvmProvider {
    pub fn new(url: &str) -> Result<Self, ProviderError> {
        let rpc_url = url
            .parse()
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self {
            provider: RootProvider::new_http(rpc_url),
            url: url.to_string(),
        })
    }
}

/// Native fee estimate: legacy gas price, plus EIP-1559 fields when the block has a base fee.
pub(crate) fn native_fee_data(gas_price: u128, base_fee_per_gas: Option<u64>) -> FeeData {
    let (max_priority_fee_per_gas, max_fee_per_gas) = match base_fee_per_gas {
        Some(base_fee) => {
            let priority = U256::from(DEFAULT_MAX_PRIORITY_FEE_PER_GAS);
            let max_fee = U256::from(base_fee) * U256::from(2) + priority;
            (Some(priority), Some(max_fee))
        }
        None => (None, None),
    };

    FeeData {
        max_priority_fee_per_gas,
        max_fee_per_gas,
        gas_price: Some(U256::from(gas_price)),
    }
}

#[async_trait]
impl EvmProviderTrait for EvmProvider {
    fn rpc_url(&self) -> String {
        self.url.clone()
    }

    async fn raw_request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.provider
            .raw_request::<Value, Value>(method.to_string().into(), params)
            .await
            .map_err(ProviderError::from)
    }

    async fn get_latest_block(&self) -> Result<BlockSummary, ProviderError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?
            .ok_or(ProviderError::MissingBlock)?;

        Ok(BlockSummary {
            number: block.header.number,
            gas_limit: block.header.gas_limit,
            base_fee_per_gas: block.header.base_fee_per_gas,
        })
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, ProviderError> {
        self.provider
            .estimate_gas(tx.clone())
            .await
            .map_err(ProviderError::from)
    }

    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError> {
        self.provider
            .call(tx.clone())
            .await
            .map_err(ProviderError::from)
    }

    async fn get_fee_data(&self) -> Result<FeeData, ProviderError> {
        let (block, gas_price) =
            tokio::try_join!(self.get_latest_block(), async {
                self.provider
                    .get_gas_price()
                    .await
                    .map_err(ProviderError::from)
            })?;

        Ok(native_fee_data(gas_price, block.base_fee_per_gas))
    }

    async fn get_chain_id(&self) -> Result<u64, ProviderError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(ProviderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = EvmProvider::new("not a url");
        assert!(matches!(result, Err(ProviderError::InvalidUrl(_))));
    }

    #[test]
    fn test_new_keeps_url() {
        let provider = EvmProvider::new("http://localhost:8545").unwrap();
        assert_eq!(provider.rpc_url(), "http://localhost:8545");
    }

    #[test]
    fn test_native_fee_data_eip1559() {
        let fee_data = native_fee_data(30_000_000_000, Some(10_000_000_000));
        assert_eq!(fee_data.gas_price, Some(U256::from(30_000_000_000u64)));
        assert_eq!(
            fee_data.max_priority_fee_per_gas,
            Some(U256::from(1_500_000_000u64))
        );
        assert_eq!(fee_data.max_fee_per_gas, Some(U256::from(21_500_000_000u64)));
    }

    #[test]
    fn test_native_fee_data_legacy() {
        let fee_data = native_fee_data(5, None);
        assert_eq!(fee_data.gas_price, Some(U256::from(5)));
        assert!(fee_data.max_priority_fee_per_gas.is_none());
        assert!(fee_data.max_fee_per_gas.is_none());
    }

    #[test]
    fn test_error_response_maps_to_rpc_error() {
        let err: ProviderError = TransportRpcError::<TransportErrorKind>::ErrorResp(
            serde_json::from_str(
                r#"{"code":-32602,"message":"invalid params","data":{"arg":0}}"#,
            )
            .unwrap(),
        )
        .into();

        assert_eq!(err.code(), Some(-32602));
        match err {
            ProviderError::Rpc(rpc) => {
                assert_eq!(rpc.message, "invalid params");
                assert_eq!(rpc.data, Some(serde_json::json!({"arg": 0})));
            }
            other => panic!("expected rpc error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_raw_request_against_mock_node() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"Geth/v1.14.0-stable"}"#)
            .create_async()
            .await;

        let provider = EvmProvider::new(&server.url()).unwrap();
        let version = provider
            .raw_request("web3_clientVersion", serde_json::json!([]))
            .await
            .unwrap();

        assert_eq!(version, serde_json::json!("Geth/v1.14.0-stable"));
    }

    #[tokio::test]
    async fn test_raw_request_error_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32601,"message":"method not found"}}"#,
            )
            .create_async()
            .await;

        let provider = EvmProvider::new(&server.url()).unwrap();
        let err = provider
            .raw_request("debug_traceCall", serde_json::json!([]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(-32601));
    }
}
