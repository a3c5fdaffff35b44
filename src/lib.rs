//! # fnkit
//!
//! Functional interfaces for Rust closures: a small family of traits over
//! arities 0 through 3, memoizing wrappers, and adapters for fallible
//! functions.
//!
//! ## Overview
//!
//! Every closure that fits the shape already implements the matching trait,
//! so the library is used by calling methods on ordinary closures:
//!
//! - **Function family**: [`Function0`](function::Function0) through
//!   [`Function3`](function::Function3) with `compose`, `and_then`, `consume`,
//!   partial application, argument reversal and `boxed()`
//! - **Roles**: predicates, consumers and operators as extension traits
//! - **Memoization**: thread-safe, unbounded, per-wrapper result caches
//! - **Throwing family**: `nest`, `sneaky_throw` and `recover` adapters for
//!   closures returning `Result`
//!
//! ## Feature Flags
//!
//! - `function`: Function family, roles and primitive aliases
//! - `memo`: Memoizing wrappers (uses `parking_lot`)
//! - `throwing`: Fallible function family and its adapters
//! - `fxhash` / `ahash`: Faster hashers for memo caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let square = (|value: u64| value * value).memoized();
//! assert_eq!(square.apply(3), 9);
//! assert_eq!(square.apply(3), 9);
//!
//! let describe = (|value: i32| value * 2).and_then(|doubled| format!("got {doubled}"));
//! assert_eq!(describe(21), "got 42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every trait so that the extension methods are available on
/// closures.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "memo")]
    pub use crate::memo::*;

    #[cfg(feature = "throwing")]
    pub use crate::throwing::*;
}

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "throwing")]
pub mod throwing;

#[doc(hidden)]
pub use paste;
