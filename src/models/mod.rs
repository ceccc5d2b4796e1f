mod error;
pub use error::*;

mod fee;
pub use fee::*;

mod storage;
pub use storage::*;

pub use alloy::primitives::U256;
