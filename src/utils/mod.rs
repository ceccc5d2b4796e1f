pub mod address;
pub use address::*;

pub mod deadline;
pub use deadline::{with_deadline, DeadlineError};
