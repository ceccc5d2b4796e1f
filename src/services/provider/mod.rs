pub mod evm;
pub use evm::*;
