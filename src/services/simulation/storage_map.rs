//! Accumulating the storage touched across simulation passes.
//!
//! Every pass reports, per account, either individual slots or a root hash
//! covering the whole account. A root supersedes slots for the same account.
//! Slot values are pre-transaction snapshots, so two passes reporting the
//! same slot agree on its value.

use crate::models::{AccountStorage, StorageMap};
use std::collections::hash_map::Entry;

/// Merges `incoming` into `merged` and returns `merged`.
///
/// - an incoming root replaces whatever is recorded for the account;
/// - incoming slots are dropped if the account already has a root;
/// - otherwise slots are added to the account's slots, last write wins.
pub fn merge_storage_map<'a>(
    merged: &'a mut StorageMap,
    incoming: &StorageMap,
) -> &'a mut StorageMap {
    for (address, storage) in incoming {
        match storage {
            AccountStorage::Root(_) => {
                merged.insert(address.clone(), storage.clone());
            }
            AccountStorage::Slots(slots) => match merged.entry(address.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(AccountStorage::Slots(slots.clone()));
                }
                Entry::Occupied(mut entry) => match entry.get_mut() {
                    AccountStorage::Root(_) => {}
                    AccountStorage::Slots(existing) => {
                        existing.extend(slots.iter().map(|(k, v)| (k.clone(), v.clone())));
                    }
                },
            },
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotMap;
    use proptest::prelude::*;

    fn slots(entries: &[(&str, &str)]) -> AccountStorage {
        AccountStorage::Slots(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn root(hash: &str) -> AccountStorage {
        AccountStorage::Root(hash.to_string())
    }

    fn map(entries: Vec<(&str, AccountStorage)>) -> StorageMap {
        entries
            .into_iter()
            .map(|(address, storage)| (address.to_string(), storage))
            .collect()
    }

    #[test]
    fn test_merge_into_empty() {
        let mut merged = StorageMap::new();
        let incoming = map(vec![("0xa", slots(&[("0x1", "0x2")])), ("0xb", root("0xr"))]);

        merge_storage_map(&mut merged, &incoming);
        assert_eq!(merged, incoming);
    }

    #[test]
    fn test_slots_are_unioned() {
        let mut merged = map(vec![("0xa", slots(&[("0x1", "0x11"), ("0x2", "0x22")]))]);
        let incoming = map(vec![("0xa", slots(&[("0x2", "0x22"), ("0x3", "0x33")]))]);

        merge_storage_map(&mut merged, &incoming);
        assert_eq!(
            merged["0xa"],
            slots(&[("0x1", "0x11"), ("0x2", "0x22"), ("0x3", "0x33")])
        );
    }

    #[test]
    fn test_conflicting_slot_last_write_wins() {
        let mut merged = map(vec![("0xa", slots(&[("0x1", "0xold")]))]);
        let incoming = map(vec![("0xa", slots(&[("0x1", "0xnew")]))]);

        merge_storage_map(&mut merged, &incoming);
        assert_eq!(merged["0xa"], slots(&[("0x1", "0xnew")]));
    }

    #[test]
    fn test_root_replaces_slots() {
        let mut merged = map(vec![("0xa", slots(&[("0x1", "0x11")]))]);
        let incoming = map(vec![("0xa", root("0xroot"))]);

        merge_storage_map(&mut merged, &incoming);
        assert_eq!(merged["0xa"], root("0xroot"));
    }

    #[test]
    fn test_slots_ignored_after_root() {
        let mut merged = map(vec![("0xa", root("0xroot"))]);
        let incoming = map(vec![("0xa", slots(&[("0x1", "0x11")]))]);

        merge_storage_map(&mut merged, &incoming);
        assert_eq!(merged["0xa"], root("0xroot"));
    }

    #[test]
    fn test_last_root_wins() {
        let mut merged = map(vec![("0xa", root("0xfirst"))]);
        let incoming = map(vec![("0xa", root("0xsecond"))]);

        merge_storage_map(&mut merged, &incoming);
        assert_eq!(merged["0xa"], root("0xsecond"));
    }

    #[test]
    fn test_returns_accumulator() {
        let mut merged = StorageMap::new();
        let first = map(vec![("0xa", slots(&[("0x1", "0x11")]))]);
        let second = map(vec![("0xb", root("0xr"))]);

        let len = merge_storage_map(merge_storage_map(&mut merged, &first), &second).len();
        assert_eq!(len, 2);
        assert_eq!(merged.len(), 2);
    }

    fn storage_strategy() -> impl Strategy<Value = AccountStorage> {
        prop_oneof![
            "0x[0-9a-f]{4}".prop_map(AccountStorage::Root),
            proptest::collection::hash_map("0x[0-3]", "0x[0-9a-f]{2}", 0..4)
                .prop_map(|slots: SlotMap| AccountStorage::Slots(slots)),
        ]
    }

    fn storage_map_strategy() -> impl Strategy<Value = StorageMap> {
        proptest::collection::hash_map("0x[a-c]", storage_strategy(), 0..4)
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(base in storage_map_strategy(), incoming in storage_map_strategy()) {
            let mut once = base.clone();
            merge_storage_map(&mut once, &incoming);

            let mut twice = base;
            merge_storage_map(&mut twice, &incoming);
            merge_storage_map(&mut twice, &incoming);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_incoming_root_always_lands(base in storage_map_strategy(), incoming in storage_map_strategy()) {
            let mut merged = base;
            merge_storage_map(&mut merged, &incoming);

            for (address, storage) in &incoming {
                if storage.is_root() {
                    prop_assert_eq!(&merged[address], storage);
                }
            }
        }

        #[test]
        fn prop_existing_root_survives_slots(base in storage_map_strategy(), incoming in storage_map_strategy()) {
            let mut merged = base.clone();
            merge_storage_map(&mut merged, &incoming);

            for (address, storage) in &base {
                if storage.is_root() && !incoming.get(address).is_some_and(AccountStorage::is_root) {
                    prop_assert_eq!(&merged[address], storage);
                }
            }
        }
    }
}
