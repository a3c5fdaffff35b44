#![cfg(all(feature = "memo", any(feature = "fxhash", feature = "ahash")))]
//! Tests for the fast hash feature flags.
//!
//! With `fxhash` or `ahash` enabled, every cache built without an explicit
//! hasher switches to that hasher. These tests pin the resolved type and
//! check that caches built on it still hit.

use fnkit::prelude::*;
use rstest::rstest;
use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Hasher Selection
// =============================================================================

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fxhash_is_the_default_hasher() {
    assert_eq!(
        TypeId::of::<DefaultMemoHasher>(),
        TypeId::of::<rustc_hash::FxBuildHasher>()
    );
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[rstest]
fn test_ahash_is_the_default_hasher() {
    assert_eq!(
        TypeId::of::<DefaultMemoHasher>(),
        TypeId::of::<ahash::RandomState>()
    );
}

#[rstest]
fn test_default_hasher_is_not_std() {
    assert_ne!(
        TypeId::of::<DefaultMemoHasher>(),
        TypeId::of::<std::collections::hash_map::RandomState>()
    );
}

// =============================================================================
// Cache Behavior
// =============================================================================

#[rstest]
fn test_memoized_wrapper_hits_with_default_hasher() {
    let calls = AtomicUsize::new(0);
    let length: MemoizedFunction1<String, usize, _, DefaultMemoHasher> =
        MemoizedFunction1::new(|text: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            text.chars().count()
        });

    assert_eq!(length.apply("héllo".to_string()), 5);
    assert_eq!(length.apply("héllo".to_string()), 5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(length.is_cached(&"héllo".to_string()));
    assert_eq!(length.cache_len(), 1);
}

#[rstest]
#[case(0)]
#[case(64)]
fn test_cache_hits_with_default_hasher(#[case] capacity: usize) {
    let cache: MemoCache<(u32, u32), u64, DefaultMemoHasher> = MemoCache::with_capacity(capacity);
    let runs = AtomicUsize::new(0);

    for _ in 0..3 {
        let product = cache.get_or_compute((6, 7), |(left, right)| {
            runs.fetch_add(1, Ordering::SeqCst);
            u64::from(left) * u64::from(right)
        });
        assert_eq!(product, 42);
    }

    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(cache.get(&(6, 7)), Some(42));
    assert_eq!(cache.get(&(7, 6)), None);
}

#[rstest]
fn test_recursive_memoization_with_default_hasher() {
    let tribonacci = memoize_recursive_with_hasher(
        |recurse: &dyn Fn(u32) -> u64, index: u32| match index {
            0 | 1 => 0,
            2 => 1,
            _ => recurse(index - 1) + recurse(index - 2) + recurse(index - 3),
        },
        DefaultMemoHasher::default(),
    );

    assert_eq!(tribonacci.apply(30), 15_902_591);
    assert_eq!(tribonacci.cache_len(), 31);
}
