//! Memoizing wrappers.
//!
//! Calling `memoized()` on any function of arity 0 through 3 returns a
//! wrapper that remembers every result it has produced. The wrapped function
//! is invoked at most once per distinct argument tuple over the lifetime of
//! the wrapper; later calls with equal arguments return a clone of the cached
//! result.
//!
//! - The cache key is `()` for arity 0, the argument itself for arity 1, and
//!   the ordered argument tuple for arities 2 and 3. Each argument is mapped
//!   to its part of the key through [`MemoKey`]; results must be `Clone`.
//!   Floating-point arguments key by bit pattern, with all `NaN`s equal and
//!   `0.0` distinct from `-0.0`.
//! - The cache is unbounded and never evicts. It is dropped together with the
//!   last clone of the wrapper.
//! - Memoizing a wrapper again returns the very same wrapper, never a cache of
//!   a cache. The [`Memoized`] marker trait and `is_memoized()` expose this.
//! - Wrappers are `Send + Sync` when the function, arguments and results are.
//!   One reentrant lock per wrapper serializes all calls, so the function runs
//!   at most once per key even when several threads ask for it at the same
//!   time.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = AtomicUsize::new(0);
//! let square = (|value: u64| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     value * value
//! })
//! .memoized();
//!
//! assert_eq!(square.apply(3), 9);
//! assert_eq!(square.apply(3), 9);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```
//!
//! ## Recursive definitions
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let fibonacci = memoize_recursive(|fibonacci, index: u64| -> u64 {
//!     if index < 2 { index } else { fibonacci(index - 1) + fibonacci(index - 2) }
//! });
//!
//! assert_eq!(fibonacci.apply(90), 2_880_067_194_370_816_120);
//! ```

mod cache;
mod key;
mod memoized;
mod recursive;

pub use cache::{DefaultMemoHasher, MemoCache};
pub use key::MemoKey;
pub use memoized::{
    Memoize0, Memoize1, Memoize2, Memoize3, Memoized, MemoizedFunction0, MemoizedFunction1,
    MemoizedFunction2, MemoizedFunction3,
};
pub use recursive::{
    RecursiveMemoized, memoize_recursive, memoize_recursive_with_capacity,
    memoize_recursive_with_hasher,
};
