pub mod gas;
pub mod provider;
pub mod rpc;
pub mod simulation;

pub use gas::*;
pub use provider::*;
pub use rpc::*;
pub use simulation::*;
