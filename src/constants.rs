//! Constants shared across the helpers.

/// Number of wei in one gwei.
pub const WEI_PER_GWEI: u64 = 1_000_000_000;

/// Number of decimals in a gwei-denominated amount.
pub const GWEI_DECIMALS: usize = 9;

/// Priority fee used by the native fee estimate when the chain supports EIP-1559.
pub const DEFAULT_MAX_PRIORITY_FEE_PER_GAS: u128 = 1_500_000_000;

/// JSON-RPC method used to fetch the node client version.
pub const WEB3_CLIENT_VERSION_METHOD: &str = "web3_clientVersion";

/// JSON-RPC method whose presence identifies a Go-Ethereum node.
pub const DEBUG_TRACE_CALL_METHOD: &str = "debug_traceCall";

/// Default polling timeout for `wait_for`.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 10_000;

/// Default interval between two `wait_for` attempts.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default deadline for a third-party gas-station request.
pub const DEFAULT_GAS_STATION_TIMEOUT_MS: u64 = 14_000;

/// Polygon gas-station endpoint.
pub const POLYGON_GAS_STATION_URL: &str = "https://gasstation.polygon.technology/v2";

/// Suggested-fees endpoint, keyed by chain id.
pub const SUGGESTED_FEES_URL: &str =
    "https://gas-api.metaswap.codefi.network/networks/{chain_id}/suggestedGasFees";

/// Placeholder replaced with the chain id in [`SUGGESTED_FEES_URL`].
pub const CHAIN_ID_PLACEHOLDER: &str = "{chain_id}";

pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;
pub const POLYGON_CHAIN_ID: u64 = 137;
pub const ARBITRUM_ONE_CHAIN_ID: u64 = 42161;

/// Safety ceiling applied to the block gas limit, in percent.
pub const BLOCK_GAS_LIMIT_CEILING_PERCENT: u64 = 90;

/// Padding applied to a raw gas estimate, in percent.
pub const GAS_ESTIMATE_PADDING_PERCENT: u64 = 150;

/// Size of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;
