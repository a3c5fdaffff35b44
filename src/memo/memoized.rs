//! Memoized wrappers for arities 0 through 3.
//!
//! The four wrapper types are generated from one template; they differ only
//! in the argument list and therefore in the shape of the cache key.

use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use super::cache::{DefaultMemoHasher, MemoCache};
use super::key::MemoKey;
use crate::function::{Function0, Function1, Function2, Function3};

/// Marker for function values that already cache their results.
///
/// Implemented only by the wrappers in this module. Generic code can use it
/// as a bound to require a memoized function.
pub trait Memoized {
    /// Returns the number of distinct argument tuples cached so far.
    fn cache_len(&self) -> usize;
}

/// The function and its cache, shared by all clones of one wrapper.
pub(crate) struct MemoState<K, R, F, S> {
    pub(crate) function: F,
    pub(crate) cache: MemoCache<K, R, S>,
}

impl<K, R, F> MemoState<K, R, F, DefaultMemoHasher> {
    pub(crate) fn new(function: F, capacity: usize) -> Self {
        Self {
            function,
            cache: MemoCache::with_capacity(capacity),
        }
    }
}

impl<K, R, F, S> MemoState<K, R, F, S> {
    pub(crate) fn with_hasher(function: F, hasher: S) -> Self {
        Self {
            function,
            cache: MemoCache::with_capacity_and_hasher(0, hasher),
        }
    }
}

macro_rules! memoized_function {
    (
        $(#[$meta:meta])*
        $arity:literal, $function_trait:ident($($argument:ident: $parameter:ident),*)
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[allow(unused_parens)]
            pub struct [<MemoizedFunction $arity>]<$($parameter: MemoKey,)* R, F, S = DefaultMemoHasher> {
                state: Arc<MemoState<($(<$parameter as MemoKey>::Key),*), R, F, S>>,
            }

            impl<$($parameter: MemoKey,)* R, F> [<MemoizedFunction $arity>]<$($parameter,)* R, F> {
                /// Wraps `function` with an empty cache.
                pub fn new(function: F) -> Self {
                    Self::with_capacity(function, 0)
                }

                /// Wraps `function` with a cache pre-sized for `capacity` entries.
                pub fn with_capacity(function: F, capacity: usize) -> Self {
                    Self {
                        state: Arc::new(MemoState::new(function, capacity)),
                    }
                }
            }

            impl<$($parameter: MemoKey,)* R, F, S> [<MemoizedFunction $arity>]<$($parameter,)* R, F, S> {
                /// Wraps `function` with an empty cache hashing keys with `hasher`.
                pub fn with_hasher(function: F, hasher: S) -> Self {
                    Self {
                        state: Arc::new(MemoState::with_hasher(function, hasher)),
                    }
                }

                /// Returns `true` if `self` and `other` are the same wrapper
                /// instance, sharing one cache.
                pub fn same_cache(&self, other: &Self) -> bool {
                    Arc::ptr_eq(&self.state, &other.state)
                }
            }

            #[allow(unused_parens)]
            impl<$($parameter: MemoKey,)* R, F, S> [<MemoizedFunction $arity>]<$($parameter,)* R, F, S>
            where
                R: Clone,
                F: Fn($($parameter),*) -> R,
                S: BuildHasher,
            {
                /// Returns `true` if a result is cached for these arguments.
                pub fn is_cached(&self, $($argument: &$parameter),*) -> bool {
                    self.state.cache.contains_key(&($($argument.memo_key()),*))
                }

                /// Returns the cached result for these arguments without computing it.
                pub fn cached(&self, $($argument: &$parameter),*) -> Option<R> {
                    self.state.cache.get(&($($argument.memo_key()),*))
                }

                /// Converts the wrapper into a plain closure sharing the same cache.
                pub fn into_fn(self) -> impl Fn($($parameter),*) -> R {
                    move |$($argument),*| self.apply($($argument),*)
                }
            }

            #[allow(unused_parens)]
            impl<$($parameter: MemoKey,)* R, F, S> $function_trait<$($parameter,)* R>
                for [<MemoizedFunction $arity>]<$($parameter,)* R, F, S>
            where
                R: Clone,
                F: Fn($($parameter),*) -> R,
                S: BuildHasher,
            {
                fn apply(&self, $($argument: $parameter),*) -> R {
                    let state = &*self.state;
                    let key = ($($argument.memo_key()),*);
                    state.cache.get_or_insert_with(key, || (state.function)($($argument),*))
                }
            }

            impl<$($parameter: MemoKey,)* R, F, S> Memoized for [<MemoizedFunction $arity>]<$($parameter,)* R, F, S> {
                fn cache_len(&self) -> usize {
                    self.state.cache.len()
                }
            }

            impl<$($parameter: MemoKey,)* R, F, S> Clone for [<MemoizedFunction $arity>]<$($parameter,)* R, F, S> {
                /// Returns a handle to the same wrapper; the cache is shared.
                fn clone(&self) -> Self {
                    Self {
                        state: Arc::clone(&self.state),
                    }
                }
            }

            impl<$($parameter: MemoKey,)* R, F, S> fmt::Debug for [<MemoizedFunction $arity>]<$($parameter,)* R, F, S> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_struct(stringify!([<MemoizedFunction $arity>]))
                        .field("cached", &self.state.cache.len())
                        .finish_non_exhaustive()
                }
            }

            #[doc = "Functions of arity " $arity " that can be memoized."]
            ///
            /// Implemented for every matching closure whose arguments are
            /// [`MemoKey`] and whose result is `Clone`, and for the
            /// memoized wrapper itself, where `memoized()` returns `self`.
            pub trait [<Memoize $arity>]<$($parameter,)* R>: $function_trait<$($parameter,)* R> {
                /// The memoized form of this function.
                type Output: $function_trait<$($parameter,)* R> + Memoized;

                /// Returns a function that caches the results of `self`.
                fn memoized(self) -> Self::Output
                where
                    Self: Sized;

                /// Returns `true` if `self` is already a memoized wrapper.
                fn is_memoized(&self) -> bool {
                    false
                }
            }

            impl<$($parameter: MemoKey,)* R, F> [<Memoize $arity>]<$($parameter,)* R> for F
            where
                R: Clone,
                F: Fn($($parameter),*) -> R,
            {
                type Output = [<MemoizedFunction $arity>]<$($parameter,)* R, F>;

                fn memoized(self) -> Self::Output {
                    [<MemoizedFunction $arity>]::new(self)
                }
            }

            impl<$($parameter: MemoKey,)* R, F, S> [<Memoize $arity>]<$($parameter,)* R>
                for [<MemoizedFunction $arity>]<$($parameter,)* R, F, S>
            where
                R: Clone,
                F: Fn($($parameter),*) -> R,
                S: BuildHasher,
            {
                type Output = Self;

                fn memoized(self) -> Self {
                    tracing::trace!("[memo]: already memoized, reusing wrapper");
                    self
                }

                fn is_memoized(&self) -> bool {
                    true
                }
            }
        }
    };
}

memoized_function! {
    /// A memoized function of no arguments.
    ///
    /// The first call runs the function; every later call returns a clone of
    /// that result.
    0, Function0()
}

memoized_function! {
    /// A memoized function of one argument, keyed by the argument itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::prelude::*;
    ///
    /// let length: MemoizedFunction1<String, usize, _> =
    ///     MemoizedFunction1::new(|text: String| text.chars().count());
    ///
    /// assert_eq!(length.apply("héllo".to_string()), 5);
    /// assert!(length.is_cached(&"héllo".to_string()));
    /// assert_eq!(length.cache_len(), 1);
    /// ```
    1, Function1(first: A)
}

memoized_function! {
    /// A memoized function of two arguments, keyed by the argument pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::prelude::*;
    ///
    /// let binomial = (|total: u64, chosen: u64| {
    ///     (1..=chosen).fold(1, |accumulator, index| accumulator * (total - chosen + index) / index)
    /// })
    /// .memoized();
    ///
    /// assert_eq!(binomial.apply(10, 3), 120);
    /// assert_eq!(binomial.cached(&10, &3), Some(120));
    /// assert_eq!(binomial.cached(&3, &10), None);
    /// ```
    2, Function2(first: A, second: B)
}

memoized_function! {
    /// A memoized function of three arguments, keyed by the argument triple.
    3, Function3(first: A, second: B, third: C)
}

static_assertions::assert_impl_all!(MemoizedFunction0<String, fn() -> String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(MemoizedFunction1<i32, i32, fn(i32) -> i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(
    MemoizedFunction3<u8, u8, u8, u8, fn(u8, u8, u8) -> u8>: Send,
    Sync,
    Clone
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    #[rstest]
    fn supplier_runs_once() {
        let runs = Cell::new(0);
        let supplier = (|| {
            runs.set(runs.get() + 1);
            "computed".to_string()
        })
        .memoized();

        assert_eq!(supplier.apply(), "computed");
        assert_eq!(supplier.apply(), "computed");
        assert_eq!(runs.get(), 1);
        assert!(supplier.is_cached());
    }

    #[rstest]
    fn three_argument_key_is_ordered() {
        let runs = Cell::new(0);
        let concat = (|first: char, second: char, third: char| {
            runs.set(runs.get() + 1);
            format!("{first}{second}{third}")
        })
        .memoized();

        assert_eq!(concat.apply('a', 'b', 'c'), "abc");
        assert_eq!(concat.apply('c', 'b', 'a'), "cba");
        assert_eq!(concat.apply('a', 'b', 'c'), "abc");

        assert_eq!(runs.get(), 2);
        assert_eq!(concat.cache_len(), 2);
    }

    #[rstest]
    fn rewrapping_returns_same_instance() {
        let once = (|value: i32| value + 1).memoized();
        let handle = once.clone();
        let twice = once.memoized();

        assert!(twice.is_memoized());
        assert!(twice.same_cache(&handle));
    }

    #[rstest]
    fn plain_closures_are_not_memoized() {
        let plain = |first: i32, second: i32| first * second;
        assert!(!plain.is_memoized());
        assert!(plain.memoized().is_memoized());
    }

    #[rstest]
    fn clones_share_one_cache() {
        let runs = Cell::new(0);
        let double: MemoizedFunction1<u8, u16, _> = MemoizedFunction1::with_capacity(
            |value: u8| {
                runs.set(runs.get() + 1);
                u16::from(value) * 2
            },
            16,
        );
        let other = double.clone();

        assert_eq!(double.apply(7), 14);
        assert_eq!(other.apply(7), 14);
        assert_eq!(runs.get(), 1);
        assert_eq!(other.cache_len(), 1);
    }

    #[rstest]
    fn distinct_wrappers_keep_distinct_caches() {
        let first = (|value: i32| value).memoized();
        let second = (|value: i32| value).memoized();

        first.apply(1);
        assert_eq!(first.cache_len(), 1);
        assert_eq!(second.cache_len(), 0);
    }

    #[rstest]
    fn into_fn_composes_with_the_function_family() {
        let runs = Cell::new(0);
        let square = (|value: i64| {
            runs.set(runs.get() + 1);
            value * value
        })
        .memoized();

        let describe = square.clone().into_fn().and_then(|value: i64| format!("={value}"));
        assert_eq!(describe(4), "=16");
        assert_eq!(square.apply(4), 16);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn custom_hasher_is_used() {
        use std::collections::hash_map::RandomState;

        let memo: MemoizedFunction2<u32, u32, u32, _, RandomState> = MemoizedFunction2::with_hasher(
            |first: u32, second: u32| first.max(second),
            RandomState::new(),
        );
        assert_eq!(memo.apply(3, 9), 9);
        assert!(memo.is_cached(&3, &9));
    }

    #[rstest]
    fn concurrent_first_access_computes_once() {
        const THREADS: usize = 8;

        let runs = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);
        let slow_square = (|value: u64| {
            runs.fetch_add(1, Ordering::SeqCst);
            thread::yield_now();
            value * value
        })
        .memoized();

        thread::scope(|scope| {
            for _ in 0..THREADS {
                scope.spawn(|| {
                    barrier.wait();
                    assert_eq!(slow_square.apply(12), 144);
                });
            }
        });

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn debug_reports_cached_entries() {
        let memo = (|value: i32| value).memoized();
        memo.apply(1);
        memo.apply(2);
        assert_eq!(format!("{memo:?}"), "MemoizedFunction1 { cached: 2, .. }");
    }
}
