//! Property-Based Tests for Cache Module
//!
//! Uses proptest with a manual clock so the freshness boundaries are hit
//! exactly instead of by sleeping.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheKey, CacheStore, Clock, ManualClock, Scope};

// == Test Configuration ==
const TEST_TTL_MS: u64 = 300_000;

fn test_store() -> (CacheStore<String>, ManualClock) {
    let clock = ManualClock::new(1_000_000);
    let store = CacheStore::with_clock(TEST_TTL_MS, Arc::new(clock.clone()));
    (store, clock)
}

// == Strategies ==
/// Generates non-empty cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_@.]{1,48}"
}

/// Generates payloads, empty included
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\[\\]{}:,\"]{0,128}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    ClearKey { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // A small key space so operations actually collide
    let key = "[abc]";
    prop_oneof![
        (key, value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
        key.prop_map(|key| CacheOp::ClearKey { key }),
        (0u64..=200_000).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // A value read anywhere inside [t0, t0 + ttl] comes back unchanged.
    #[test]
    fn prop_fresh_reads_return_value(
        key in key_strategy(),
        value in value_strategy(),
        offsets in prop::collection::vec(0u64..=TEST_TTL_MS, 1..10)
    ) {
        let (mut store, clock) = test_store();
        let t0 = clock.now_ms();
        store.set(key.clone(), value.clone());

        let mut offsets = offsets;
        offsets.sort_unstable();
        for offset in offsets {
            clock.set(t0 + offset);
            prop_assert_eq!(store.get(&key), Some(value.clone()));
        }
    }

    // Any read after t0 + ttl misses.
    #[test]
    fn prop_stale_reads_are_absent(
        key in key_strategy(),
        value in value_strategy(),
        late_by in 1u64..10_000_000
    ) {
        let (mut store, clock) = test_store();
        let t0 = clock.now_ms();
        store.set(key.clone(), value);

        clock.set(t0 + TEST_TTL_MS + late_by);
        prop_assert_eq!(store.get(&key), None);
        prop_assert_eq!(store.size(), 0);
        prop_assert_eq!(store.get(&key), None);
    }

    // The second write wins and its time starts the window.
    #[test]
    fn prop_overwrite_law(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
        gap in 1u64..TEST_TTL_MS
    ) {
        let (mut store, clock) = test_store();
        let t0 = clock.now_ms();

        store.set(key.clone(), v1);
        clock.set(t0 + gap);
        store.set(key.clone(), v2.clone());

        clock.set(t0 + gap + TEST_TTL_MS);
        prop_assert_eq!(store.get(&key), Some(v2));
        prop_assert_eq!(store.size(), 1);

        clock.set(t0 + gap + TEST_TTL_MS + 1);
        prop_assert_eq!(store.get(&key), None);
    }

    // Reading a key that was never set is a pure miss.
    #[test]
    fn prop_idempotent_miss(
        present in prop::collection::vec((key_strategy(), value_strategy()), 0..10),
        missing in key_strategy(),
        repeats in 1usize..5
    ) {
        let (mut store, _clock) = test_store();
        for (key, value) in &present {
            store.set(key.clone(), value.clone());
        }
        prop_assume!(!present.iter().any(|(key, _)| *key == missing));

        let size_before = store.size();
        for _ in 0..repeats {
            prop_assert_eq!(store.get(&missing), None);
        }
        prop_assert_eq!(store.size(), size_before);
    }

    // clear_key forces a miss even inside the window and spares other keys.
    #[test]
    fn prop_clear_key_isolated(
        k1 in key_strategy(),
        k2 in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy()
    ) {
        prop_assume!(k1 != k2);
        let (mut store, _clock) = test_store();

        store.set(k1.clone(), v1);
        store.set(k2.clone(), v2.clone());
        store.clear_key(&k1);

        prop_assert_eq!(store.get(&k1), None);
        prop_assert_eq!(store.get(&k2), Some(v2));
    }

    // Distinct identities never see each other's data.
    #[test]
    fn prop_scopes_do_not_leak(
        user_a in "[a-z]{1,8}@[a-z]{1,8}\\.com",
        user_b in "[a-z]{1,8}@[a-z]{1,8}\\.com",
        data_a in value_strategy(),
        data_b in value_strategy()
    ) {
        prop_assume!(user_a != user_b);
        let (mut store, _clock) = test_store();
        let key_a = CacheKey::scoped("crypto", Scope::User(user_a)).unwrap();
        let key_b = CacheKey::scoped("crypto", Scope::User(user_b)).unwrap();

        store.set_scoped(&key_a, data_a.clone());
        store.set_scoped(&key_b, data_b.clone());

        prop_assert_eq!(store.get_scoped(&key_a), Some(data_a));
        prop_assert_eq!(store.get_scoped(&key_b), Some(data_b));
    }

    // The store agrees with a simple timestamped model for any operation mix,
    // and `has` always predicts what `get` will return.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (mut store, clock) = test_store();
        let mut model: HashMap<String, (String, u64)> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            let now = clock.now_ms();
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone());
                    model.insert(key, (value, now));
                }
                CacheOp::Get { key } => {
                    let predicted = store.has(&key);
                    let expected = match model.get(&key).cloned() {
                        Some((value, stored_at)) if now - stored_at <= TEST_TTL_MS => Some(value),
                        Some(_) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    let actual = store.get(&key);
                    prop_assert_eq!(predicted, actual.is_some());
                    prop_assert_eq!(&actual, &expected);
                    if actual.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
                CacheOp::ClearKey { key } => {
                    prop_assert_eq!(store.clear_key(&key), model.remove(&key).is_some());
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
            prop_assert_eq!(store.size(), model.len());
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.size());
    }

    // clear empties the store no matter what was in it.
    #[test]
    fn prop_clear_empties(entries in prop::collection::vec((key_strategy(), value_strategy()), 0..30)) {
        let (mut store, _clock) = test_store();
        for (key, value) in &entries {
            store.set(key.clone(), value.clone());
        }

        let size = store.size();
        prop_assert_eq!(store.clear(), size);
        prop_assert_eq!(store.size(), 0);
        for (key, _) in &entries {
            prop_assert_eq!(store.get(key), None);
        }
    }
}

