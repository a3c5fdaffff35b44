//! Fallible functions and adapters over them.
//!
//! Any closure of arity 0 through 3 that returns `Result<R, E>` implements
//! the matching `ThrowingFunctionN` trait. Errors fall into two categories:
//!
//! - **Recoverable**: the `Err(E)` a function returns. The adapters below
//!   translate or handle these.
//! - **Fatal**: panics. They are never caught and propagate unchanged
//!   through every adapter.
//!
//! | Adapter          | Result type                               |
//! |------------------|-------------------------------------------|
//! | `nest()`         | `Result<R, NestedError>`                  |
//! | `nest_with(f)`   | `Result<R, X>`                            |
//! | `sneaky_throw()` | `Result<R, SneakyError>`                  |
//! | `recover(f)`     | `R`                                       |
//! | `try_recover(f)` | `Result<R, MissingFallbackError<E>>`      |
//!
//! # Examples
//!
//! ```rust
//! use fnkit::prelude::*;
//! use std::error::Error;
//! use std::num::ParseIntError;
//!
//! let parse = |text: &str| text.parse::<i64>();
//!
//! let nested = parse.nest();
//! let error = nested("ten").unwrap_err();
//! assert_eq!(error.to_string(), "invalid digit found in string");
//! assert!(error.source().unwrap().is::<ParseIntError>());
//!
//! let lenient = parse.recover(|_| |_: &str| -1);
//! assert_eq!(lenient("10"), 10);
//! assert_eq!(lenient("ten"), -1);
//! ```
//!
//! Any `Function*` can be lifted into this family with `throwing()`:
//!
//! ```rust
//! use fnkit::prelude::*;
//! use std::convert::Infallible;
//!
//! let double = (|value: i32| value * 2).throwing::<Infallible>();
//! assert_eq!(double.try_apply(4), Ok(8));
//! ```

mod error;
mod functions;

pub use error::{MissingFallbackError, NestedError, SneakyError};
pub use functions::{ThrowingFunction0, ThrowingFunction1, ThrowingFunction2, ThrowingFunction3};
