//! The result cache owned by a memoized wrapper.
//!
//! A [`MemoCache`] is an unbounded map from argument keys to results. All
//! access goes through one `parking_lot::ReentrantMutex`, which serializes
//! the whole check-compute-insert sequence across threads. Because the lock
//! is reentrant, a function being computed may call back into the same cache
//! on the same thread, which is what recursive memoization relies on.
//!
//! The map itself lives in a `RefCell` inside the lock. Borrows are never
//! held across the user computation, so a reentrant call always finds the
//! cell free.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use parking_lot::ReentrantMutex;

/// Hasher used by memo caches when none is given.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`; with
/// `ahash` (and not `fxhash`) it is `ahash::RandomState`; otherwise it is the
/// standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultMemoHasher = rustc_hash::FxBuildHasher;

/// Hasher used by memo caches when none is given.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultMemoHasher = ahash::RandomState;

/// Hasher used by memo caches when none is given.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultMemoHasher = std::collections::hash_map::RandomState;

/// An unbounded, never-evicting cache from keys to computed values.
///
/// # Type Parameters
///
/// * `K` - The key type, the argument (or argument tuple) of the wrapped function
/// * `V` - The cached result type
/// * `S` - The hasher builder
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::MemoCache;
///
/// let cache: MemoCache<u32, String> = MemoCache::new();
///
/// let first = cache.get_or_compute(7, |key| format!("value {key}"));
/// let second = cache.get_or_compute(7, |_| unreachable!("cached"));
///
/// assert_eq!(first, "value 7");
/// assert_eq!(second, "value 7");
/// assert_eq!(cache.len(), 1);
/// ```
pub struct MemoCache<K, V, S = DefaultMemoHasher> {
    entries: ReentrantMutex<RefCell<HashMap<K, V, S>>>,
}

impl<K, V> MemoCache<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty cache with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultMemoHasher::default())
    }
}

impl<K, V, S> MemoCache<K, V, S> {
    /// Creates an empty cache using `hasher` to hash keys.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: ReentrantMutex::new(RefCell::new(HashMap::with_capacity_and_hasher(
                capacity, hasher,
            ))),
        }
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> MemoCache<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Returns the cached value for `key`, computing and storing it first if absent.
    ///
    /// `compute` runs at most once per key for the lifetime of the cache. The
    /// lock is held while it runs, so concurrent callers (for any key) wait.
    /// If `compute` panics, nothing is stored and the cache stays usable.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce(K) -> V,
    {
        let argument = key.clone();
        self.get_or_insert_with(key, move || compute(argument))
    }

    /// Like [`get_or_compute`](Self::get_or_compute), for computations that
    /// do not need the key.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let guard = self.entries.lock();

        let cached = guard.borrow().get(&key).cloned();
        if let Some(value) = cached {
            tracing::trace!("[memo]: hit (entries: {})", guard.borrow().len());
            return value;
        }

        tracing::trace!("[memo]: miss (entries: {})", guard.borrow().len());
        let value = compute();

        // A reentrant computation may already have stored this key; the first entry wins.
        guard.borrow_mut().entry(key).or_insert(value).clone()
    }

    /// Returns a clone of the cached value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().borrow().get(key).cloned()
    }

    /// Returns `true` if a value is cached for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.lock().borrow().contains_key(key)
    }
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for MemoCache<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("len", &self.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(MemoCache<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(MemoCache<(i32, char), Vec<u8>>: Send, Sync);
static_assertions::assert_not_impl_any!(MemoCache<std::rc::Rc<i32>, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn new_cache_is_empty() {
        let cache: MemoCache<i32, i32> = MemoCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
        assert!(!cache.contains_key(&1));
    }

    #[rstest]
    fn compute_runs_once_per_key() {
        let cache: MemoCache<&str, usize> = MemoCache::with_capacity(4);
        let runs = Cell::new(0);
        let compute = |key: &str| {
            runs.set(runs.get() + 1);
            key.len()
        };

        assert_eq!(cache.get_or_compute("abc", compute), 3);
        assert_eq!(cache.get_or_compute("abc", compute), 3);
        assert_eq!(cache.get_or_compute("abcd", compute), 4);

        assert_eq!(runs.get(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"abcd"), Some(4));
    }

    #[rstest]
    fn reentrant_compute_does_not_deadlock() {
        let cache: MemoCache<u32, u32> = MemoCache::new();

        let outer = cache.get_or_compute(2, |key| {
            let inner = cache.get_or_compute(key - 1, |inner_key| inner_key * 100);
            inner + key
        });

        assert_eq!(outer, 102);
        assert_eq!(cache.get(&1), Some(100));
        assert_eq!(cache.get(&2), Some(102));
    }

    #[rstest]
    fn reentrant_insert_of_same_key_keeps_first_value() {
        let cache: MemoCache<u32, &str> = MemoCache::new();

        let value = cache.get_or_compute(1, |key| {
            cache.get_or_compute(key, |_| "inner");
            "outer"
        });

        assert_eq!(value, "inner");
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn panicking_compute_leaves_cache_usable() {
        let cache: MemoCache<u32, u32> = MemoCache::new();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            cache.get_or_compute(1, |_| panic!("compute failed"))
        }));

        assert!(outcome.is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_compute(1, |key| key + 1), 2);
    }

    #[rstest]
    fn debug_shows_length() {
        let cache: MemoCache<u8, u8> = MemoCache::new();
        cache.get_or_compute(1, |key| key);
        assert_eq!(format!("{cache:?}"), "MemoCache { len: 1 }");
    }
}
