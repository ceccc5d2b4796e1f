//! Helpers around a JSON-RPC provider: capability probing, polling, and
//! parameter construction.
pub mod capability;
pub mod params;
pub mod poll;

pub use capability::*;
pub use params::*;
pub use poll::*;
