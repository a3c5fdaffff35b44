//! Memoization for self-recursive functions.
//!
//! A closure cannot name itself, so a recursive definition receives a handle
//! to its own memoized wrapper as the first argument. Every recursive call
//! made through that handle goes through the cache.

use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use super::cache::DefaultMemoHasher;
use super::key::MemoKey;
use super::memoized::{MemoState, Memoize1, Memoized};
use crate::function::Function1;

/// A memoized one-argument function whose body may call itself.
///
/// Created by [`memoize_recursive`].
pub struct RecursiveMemoized<A: MemoKey, R, F, S = DefaultMemoHasher> {
    state: Arc<MemoState<A::Key, R, F, S>>,
}

/// Memoizes a recursive one-argument function.
///
/// `function` is called with a handle to the memoized wrapper and the
/// argument. Calls made through the handle are cached, so a naive recursive
/// definition runs in time linear in the number of distinct arguments.
///
/// # Examples
///
/// ```rust
/// use fnkit::prelude::*;
///
/// // Number of lattice paths through a square grid of the given size.
/// let paths = memoize_recursive(|paths, (right, down): (u32, u32)| -> u64 {
///     if right == 0 || down == 0 {
///         1
///     } else {
///         paths((right - 1, down)) + paths((right, down - 1))
///     }
/// });
///
/// assert_eq!(paths.apply((20, 20)), 137_846_528_820);
/// ```
pub fn memoize_recursive<A, R, F>(function: F) -> RecursiveMemoized<A, R, F>
where
    A: MemoKey,
    R: Clone,
    F: Fn(&dyn Fn(A) -> R, A) -> R,
{
    memoize_recursive_with_capacity(function, 0)
}

/// Like [`memoize_recursive`], with a cache pre-sized for `capacity` entries.
pub fn memoize_recursive_with_capacity<A, R, F>(
    function: F,
    capacity: usize,
) -> RecursiveMemoized<A, R, F>
where
    A: MemoKey,
    R: Clone,
    F: Fn(&dyn Fn(A) -> R, A) -> R,
{
    RecursiveMemoized {
        state: Arc::new(MemoState::new(function, capacity)),
    }
}

/// Like [`memoize_recursive`], hashing cache keys with `hasher`.
pub fn memoize_recursive_with_hasher<A, R, F, S>(
    function: F,
    hasher: S,
) -> RecursiveMemoized<A, R, F, S>
where
    A: MemoKey,
    R: Clone,
    F: Fn(&dyn Fn(A) -> R, A) -> R,
    S: BuildHasher,
{
    RecursiveMemoized {
        state: Arc::new(MemoState::with_hasher(function, hasher)),
    }
}

impl<A: MemoKey, R, F, S> RecursiveMemoized<A, R, F, S> {
    /// Returns `true` if `self` and `other` are the same wrapper instance.
    pub fn same_cache(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl<A, R, F, S> Function1<A, R> for RecursiveMemoized<A, R, F, S>
where
    A: MemoKey,
    R: Clone,
    F: Fn(&dyn Fn(A) -> R, A) -> R,
    S: BuildHasher,
{
    fn apply(&self, first: A) -> R {
        let state = &*self.state;
        state.cache.get_or_insert_with(first.memo_key(), || {
            let recurse = |next: A| self.apply(next);
            (state.function)(&recurse, first)
        })
    }
}

impl<A, R, F, S> Memoize1<A, R> for RecursiveMemoized<A, R, F, S>
where
    A: MemoKey,
    R: Clone,
    F: Fn(&dyn Fn(A) -> R, A) -> R,
    S: BuildHasher,
{
    type Output = Self;

    fn memoized(self) -> Self {
        self
    }

    fn is_memoized(&self) -> bool {
        true
    }
}

impl<A: MemoKey, R, F, S> Memoized for RecursiveMemoized<A, R, F, S> {
    fn cache_len(&self) -> usize {
        self.state.cache.len()
    }
}

impl<A: MemoKey, R, F, S> Clone for RecursiveMemoized<A, R, F, S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: MemoKey, R, F, S> fmt::Debug for RecursiveMemoized<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RecursiveMemoized")
            .field("cached", &self.state.cache.len())
            .finish_non_exhaustive()
    }
}
