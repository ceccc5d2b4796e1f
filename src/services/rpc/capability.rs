//! Provider capability detection.
//!
//! Nodes answer an unknown method with "method not found" and a known method
//! called with the wrong arity with "invalid params" (-32602), so sending a
//! method with no parameters tells whether the node implements it.

use crate::{
    constants::{DEBUG_TRACE_CALL_METHOD, WEB3_CLIENT_VERSION_METHOD},
    models::{ProviderError, RpcErrorCode},
    services::EvmProviderTrait,
};
use dashmap::DashMap;
use log::{debug, info, warn};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

/// Returns true if the node behind `provider` implements `method`.
///
/// Never fails: any outcome other than an "invalid params" error counts as unsupported.
pub async fn supports_rpc_method<P>(provider: &P, method: &str) -> bool
where
    P: EvmProviderTrait + ?Sized,
{
    match provider.raw_request(method, json!([])).await {
        Err(ProviderError::Rpc(err)) if err.is(RpcErrorCode::InvalidFields) => true,
        Ok(_) => {
            debug!("{} accepted empty params, treating as unsupported", method);
            false
        }
        Err(err) => {
            debug!("{} not supported: {}", method, err);
            false
        }
    }
}

/// A memoized `web3_clientVersion` answer.
#[derive(Clone, Debug)]
pub struct ClientVersionEntry {
    pub client_version: String,
    pub fetched_at: Instant,
}

impl ClientVersionEntry {
    pub fn new(client_version: String) -> Self {
        Self {
            client_version,
            fetched_at: Instant::now(),
        }
    }

    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// Client versions keyed by provider URL.
///
/// Owned by whatever builds the providers; safe to share between tasks.
#[derive(Debug, Default)]
pub struct ClientVersionCache {
    entries: DashMap<String, ClientVersionEntry>,
}

impl ClientVersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the client version of `provider`, asking the node on first use.
    pub async fn client_version<P>(&self, provider: &P) -> Result<String, ProviderError>
    where
        P: EvmProviderTrait + ?Sized,
    {
        let key = provider.rpc_url();
        if let Some(entry) = self.entries.get(&key) {
            debug!(
                "Client version for {} cached {:?} ago",
                key,
                entry.age()
            );
            return Ok(entry.client_version.clone());
        }

        let response = provider
            .raw_request(WEB3_CLIENT_VERSION_METHOD, json!([]))
            .await?;
        let client_version = match response {
            Value::String(version) => version,
            other => other.to_string(),
        };

        self.entries
            .insert(key.clone(), ClientVersionEntry::new(client_version.clone()));
        info!("Cached client version {} for {}", client_version, key);
        Ok(client_version)
    }

    /// Best-effort check for a Go-Ethereum node, based on `debug_traceCall` support.
    pub async fn is_geth<P>(&self, provider: &P) -> bool
    where
        P: EvmProviderTrait + ?Sized,
    {
        if let Err(err) = self.client_version(provider).await {
            warn!(
                "Failed to fetch client version for {}: {}",
                provider.rpc_url(),
                err
            );
        }
        supports_rpc_method(provider, DEBUG_TRACE_CALL_METHOD).await
    }

    pub fn get(&self, rpc_url: &str) -> Option<ClientVersionEntry> {
        self.entries.get(rpc_url).map(|entry| entry.clone())
    }

    /// Forgets the entry for one provider.
    pub fn invalidate(&self, rpc_url: &str) -> bool {
        self.entries.remove(rpc_url).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
