//! This module contains services related to gas estimation and fee suggestions.
pub mod estimate;
pub mod fee_oracle;
pub mod gas_station;

pub use estimate::*;
pub use fee_oracle::*;
pub use gas_station::*;
