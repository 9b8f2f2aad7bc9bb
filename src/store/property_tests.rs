//! Property-Based Tests for the Store Module
//!
//! Uses proptest to check MemoryStore against the key-value contract.

use proptest::prelude::*;
use std::thread::sleep;
use std::time::Duration;

use crate::store::{MemoryStore, Store};

// == Strategies ==
/// Generates store keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:]{1,64}"
}

/// Generates arbitrary byte values
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* key and value, SET then GET returns the value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = MemoryStore::new();

        store.set(&key, &value).unwrap();

        prop_assert_eq!(store.get(&key).unwrap(), Some(value));
    }

    // *For any* key, two GETs without a write in between agree.
    #[test]
    fn prop_reads_are_idempotent(key in key_strategy(), value in value_strategy()) {
        let mut store = MemoryStore::new();
        store.set(&key, &value).unwrap();

        let first = store.get(&key).unwrap();
        let second = store.get(&key).unwrap();
        prop_assert_eq!(first, second);
    }

    // *For any* key, writing V1 then V2 leaves V2 and a single entry.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = MemoryStore::new();

        store.setex(&key, 60, &value1).unwrap();
        store.set(&key, &value2).unwrap();

        prop_assert_eq!(store.get(&key).unwrap(), Some(value2));
        prop_assert_eq!(store.ttl_remaining_ms(&key), None, "SET should clear the TTL");
        prop_assert_eq!(store.len(), 1);
    }

    // *For any* sequence of pushes, the full range returns them in order.
    #[test]
    fn prop_rpush_preserves_order(values in prop::collection::vec(value_strategy(), 0..50)) {
        let mut store = MemoryStore::new();

        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(store.rpush("list", value).unwrap(), i + 1);
        }

        prop_assert_eq!(store.lrange("list", 0, -1).unwrap(), values);
    }

    // *For any* N increments of a fresh key, the value is N.
    #[test]
    fn prop_incr_counts(n in 1usize..100) {
        let mut store = MemoryStore::new();

        let mut last = 0;
        for _ in 0..n {
            last = store.incr("counter").unwrap();
        }

        prop_assert_eq!(last, n as i64);
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // *For any* entry stored with a TTL, GET returns nothing once it elapses.
    #[test]
    fn prop_ttl_expiration_behavior(key in key_strategy(), value in value_strategy()) {
        let mut store = MemoryStore::new();

        store.setex(&key, 1, &value).unwrap();
        prop_assert_eq!(store.get(&key).unwrap(), Some(value));

        sleep(Duration::from_millis(1100));

        prop_assert_eq!(store.get(&key).unwrap(), None);
    }
}
