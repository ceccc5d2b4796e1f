use super::U256;

/// Fee components for a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeData {
    pub max_priority_fee_per_gas: Option<U256>,
    pub max_fee_per_gas: Option<U256>,
    pub gas_price: Option<U256>,
}

/// Raw gas estimate together with the padded value to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub expanded_gas: U256,
    pub gas: U256,
}

/// The fields of the latest block the helpers care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockSummary {
    pub number: u64,
    pub gas_limit: u64,
    pub base_fee_per_gas: Option<u64>,
}
