//! The function family.
//!
//! This module provides traits describing function-shaped values of arity
//! 0 through 3. Each trait is implemented for every closure, function item
//! and boxed `dyn Fn` of the matching shape, so the methods are available
//! without any wrapping:
//!
//! - [`Function0`]: `Fn() -> R` (supplier)
//! - [`Function1`]: `Fn(A) -> R`
//! - [`Function2`]: `Fn(A, B) -> R`
//! - [`Function3`]: `Fn(A, B, C) -> R`
//!
//! Roles are expressed as extension traits over the same shapes:
//!
//! - [`Predicate1`], [`Predicate2`], [`Predicate3`]: functions returning `bool`
//! - [`Consumer1`], [`Consumer2`], [`Consumer3`]: functions returning `()`
//! - [`UnaryOperator`], [`BinaryOperator`]: functions whose inputs and output
//!   share one type
//!
//! # Examples
//!
//! ## Composition
//!
//! ```
//! use fnkit::function::Function1;
//!
//! let parse = |text: &str| text.len();
//! let double = |length: usize| length * 2;
//!
//! let composed = double.compose(parse);
//! assert_eq!(composed("four"), 8);
//! ```
//!
//! ## Partial application and reversal
//!
//! ```
//! use fnkit::function::Function2;
//!
//! let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
//!
//! let from_ten = subtract.partial_first(10);
//! assert_eq!(from_ten(3), 7);
//!
//! let reversed = subtract.reversed();
//! assert_eq!(reversed(3, 10), 7);
//! ```
//!
//! ## Boxed and primitive-specialized siblings
//!
//! ```
//! use fnkit::function::{Function1, IntUnaryOperator};
//!
//! let increment: IntUnaryOperator = (|value: i32| value + 1).boxed();
//! assert_eq!(increment(41), 42);
//! ```

mod boxed;
mod consumer;
mod curry_macro;
mod functions;
mod operator;
mod partial;
mod predicate;
mod utils;

pub use boxed::*;
pub use consumer::{Consumer1, Consumer2, Consumer3};
pub use functions::{Function0, Function1, Function2, Function3};
pub use operator::{BinaryOperator, UnaryOperator, max, max_by, min, min_by, unary_identity};
pub use partial::{only_first2, only_first3, only_second2, only_second3, only_third3};
pub use predicate::{Predicate1, Predicate2, Predicate3};
pub use utils::{constant, flip, identity};
