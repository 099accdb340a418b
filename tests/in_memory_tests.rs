//! Integration tests for InMemoryStore using the store test harness.
//!
//! This file invokes `entity_store_tests!` to validate that InMemoryStore
//! fully conforms to the EntityStore<T> contract.

#[macro_use]
mod store_harness;

use market_admin::storage::InMemoryStore;
use store_harness::*;

entity_store_tests!(InMemoryStore::<Lamp>::new());

#[test]
fn test_from_records_rejects_duplicates() {
    let mut lamps = sample_lamps();
    lamps.push(lamp("l1", "Copy", None, LampStatus::On));
    assert!(InMemoryStore::from_records(lamps).is_err());
}

#[test]
fn test_replace_all_resets_order() {
    let mut store = InMemoryStore::from_records(sample_lamps()).unwrap();
    let mut reversed = sample_lamps();
    reversed.reverse();
    store.replace_all(reversed).unwrap();

    let ids: Vec<&str> = store.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l5", "l4", "l3", "l2", "l1"]);
}
