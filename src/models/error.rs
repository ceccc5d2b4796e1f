//! Error types shared by the helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Well-known JSON-RPC error codes, including the account-abstraction range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum RpcErrorCode {
    MethodNotFound = -32601,
    InvalidFields = -32602,
    SimulateValidation = -32500,
    SimulatePaymasterValidation = -32501,
    OpcodeValidation = -32502,
    NotInTimeRange = -32503,
    Reputation = -32504,
    InsufficientStake = -32505,
    UnsupportedSignatureAggregator = -32506,
    InvalidSignature = -32507,
    UserOperationReverted = -32521,
}

impl RpcErrorCode {
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl From<RpcErrorCode> for i64 {
    fn from(code: RpcErrorCode) -> Self {
        code.code()
    }
}

/// A JSON-RPC error carrying its numeric code and optional structured data.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: impl Into<i64>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns true if the error carries the given well-known code.
    pub fn is(&self, code: RpcErrorCode) -> bool {
        self.code == code.code()
    }
}

/// Errors returned by an [`EvmProviderTrait`](crate::services::EvmProviderTrait) implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("RPC error: {0}")]
    Rpc(RpcError),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
    #[error("Latest block not available")]
    MissingBlock,
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// The JSON-RPC error code, if the node answered with an error payload.
    pub fn code(&self) -> Option<i64> {
        match self {
            ProviderError::Rpc(err) => Some(err.code),
            _ => None,
        }
    }
}

impl From<RpcError> for ProviderError {
    fn from(err: RpcError) -> Self {
        ProviderError::Rpc(err)
    }
}

/// Errors raised while parsing caller-supplied data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    #[error("Invalid hex data: {0}")]
    InvalidHex(String),
}
