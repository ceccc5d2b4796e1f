//! Helpers for Ethereum-facing clients.
//!
//! The crate groups a handful of independent utilities used around an EVM
//! JSON-RPC provider:
//!
//! - RPC capability probing and Geth detection ([`services::rpc`])
//! - polling with a deadline ([`services::rpc::poll`], [`utils::deadline`])
//! - padded gas estimation ([`services::gas::estimate`])
//! - storage-map merging for simulation passes ([`services::simulation`])
//! - address extraction from packed call data ([`utils::address`])
//! - third-party fee suggestions with a native fallback ([`services::gas::gas_station`])
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;
