use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage slot key to value.
pub type SlotMap = HashMap<String, String>;

/// Address to the storage touched by a simulation pass.
pub type StorageMap = HashMap<String, AccountStorage>;

/// Storage recorded for a single account.
///
/// On the wire an account is either a root hash string, standing for the
/// whole account state, or an object of individual slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountStorage {
    Root(String),
    Slots(SlotMap),
}

impl AccountStorage {
    pub fn is_root(&self) -> bool {
        matches!(self, AccountStorage::Root(_))
    }
}
