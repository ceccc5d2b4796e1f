//! Helpers for combining the results of transaction simulations.
pub mod storage_map;
pub use storage_map::*;
