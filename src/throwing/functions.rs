//! Fallible function traits for arities 0 through 3 and their adapters.
//!
//! Every adapter shares one skeleton:
//!
//! ```text
//! try_apply(args) ── Ok(value) ──────────────► value
//!                 ── panic ──────────────────► unwinds untouched
//!                 ── Err(error) ─┬─ nest ─────► Err(NestedError)
//!                                ├─ sneaky ───► Err(SneakyError) holding `error`
//!                                └─ recover ──► fallback(args)
//! ```
//!
//! Panics are the fatal category: no adapter catches them.

use std::error::Error;
use std::fmt;

use super::error::{MissingFallbackError, NestedError, SneakyError};

macro_rules! throwing_function {
    (
        $(#[$meta:meta])*
        $name:ident($($argument:ident: $parameter:ident),*)
    ) => {
        $(#[$meta])*
        pub trait $name<$($parameter,)* R, E> {
            /// Invokes the function, returning its error instead of a result on failure.
            fn try_apply(&self, $($argument: $parameter),*) -> Result<R, E>;

            /// Returns a function that wraps any error in a [`NestedError`]
            /// carrying the original message and the original error as source.
            fn nest(self) -> impl Fn($($parameter),*) -> Result<R, NestedError>
            where
                Self: Sized,
                E: Error + Send + Sync + 'static,
            {
                move |$($argument),*| {
                    self.try_apply($($argument),*).map_err(|error| {
                        tracing::trace!(
                            "[throwing]: nesting {} ({})",
                            std::any::type_name::<E>(),
                            error
                        );
                        NestedError::new(error)
                    })
                }
            }

            /// Returns a function that translates any error with `mapper`.
            fn nest_with<X, M>(self, mapper: M) -> impl Fn($($parameter),*) -> Result<R, X>
            where
                Self: Sized,
                M: Fn(E) -> X,
            {
                move |$($argument),*| {
                    self.try_apply($($argument),*).map_err(|error| {
                        tracing::trace!("[throwing]: mapping {}", std::any::type_name::<E>());
                        mapper(error)
                    })
                }
            }

            /// Returns a function whose error type is erased.
            ///
            /// The error value is moved into the box unchanged, so
            /// downcasting to `E` yields the original error.
            fn sneaky_throw(self) -> impl Fn($($parameter),*) -> Result<R, SneakyError>
            where
                Self: Sized,
                E: Error + Send + Sync + 'static,
            {
                move |$($argument),*| {
                    self.try_apply($($argument),*).map_err(|error| {
                        tracing::trace!("[throwing]: erasing {}", std::any::type_name::<E>());
                        SneakyError::from(error)
                    })
                }
            }

            /// Returns an infallible function that, on error, asks
            /// `recover_fn` for a fallback and calls it with the same arguments.
            #[allow(clippy::redundant_clone)]
            fn recover<G, H>(self, recover_fn: H) -> impl Fn($($parameter),*) -> R
            where
                Self: Sized,
                H: Fn(E) -> G,
                G: Fn($($parameter),*) -> R,
                $($parameter: Clone,)*
            {
                move |$($argument),*| match self.try_apply($($argument.clone()),*) {
                    Ok(value) => value,
                    Err(error) => {
                        tracing::trace!("[throwing]: recovering from {}", std::any::type_name::<E>());
                        let fallback = recover_fn(error);
                        fallback($($argument),*)
                    }
                }
            }

            /// Like [`recover`](Self::recover), but `recover_fn` may decline
            /// by returning `None`, which yields a [`MissingFallbackError`]
            /// naming the original error.
            #[allow(clippy::redundant_clone)]
            fn try_recover<G, H>(
                self,
                recover_fn: H,
            ) -> impl Fn($($parameter),*) -> Result<R, MissingFallbackError<E>>
            where
                Self: Sized,
                H: Fn(&E) -> Option<G>,
                G: Fn($($parameter),*) -> R,
                E: fmt::Display,
                $($parameter: Clone,)*
            {
                move |$($argument),*| match self.try_apply($($argument.clone()),*) {
                    Ok(value) => Ok(value),
                    Err(error) => match recover_fn(&error) {
                        Some(fallback) => {
                            tracing::trace!("[throwing]: recovering from {}", std::any::type_name::<E>());
                            Ok(fallback($($argument),*))
                        }
                        None => {
                            tracing::debug!("[throwing]: no fallback for {}: {}", std::any::type_name::<E>(), error);
                            Err(MissingFallbackError::new(error))
                        }
                    },
                }
            }
        }

        impl<$($parameter,)* R, E, F> $name<$($parameter,)* R, E> for F
        where
            F: Fn($($parameter),*) -> Result<R, E>,
        {
            #[inline]
            fn try_apply(&self, $($argument: $parameter),*) -> Result<R, E> {
                self($($argument),*)
            }
        }
    };
}

throwing_function! {
    /// A fallible function of no arguments.
    ///
    /// Implemented by every `Fn() -> Result<R, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::throwing::ThrowingFunction0;
    ///
    /// let read = || "42".parse::<i32>();
    /// let nested = read.nest();
    ///
    /// assert_eq!(nested().unwrap(), 42);
    /// ```
    ThrowingFunction0()
}

throwing_function! {
    /// A fallible function of one argument.
    ///
    /// Implemented by every `Fn(A) -> Result<R, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::throwing::ThrowingFunction1;
    ///
    /// let parse = |text: &str| text.parse::<i32>();
    /// let parse_or_zero = parse.recover(|_| |_: &str| 0);
    ///
    /// assert_eq!(parse_or_zero("12"), 12);
    /// assert_eq!(parse_or_zero("twelve"), 0);
    /// ```
    ThrowingFunction1(first: A)
}

throwing_function! {
    /// A fallible function of two arguments.
    ///
    /// Implemented by every `Fn(A, B) -> Result<R, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::throwing::ThrowingFunction2;
    /// use std::num::ParseIntError;
    ///
    /// let parse_radix = |text: &str, radix: u32| u32::from_str_radix(text, radix);
    /// let erased = parse_radix.sneaky_throw();
    ///
    /// assert_eq!(erased("ff", 16).unwrap(), 255);
    /// let error = erased("zz", 16).unwrap_err();
    /// assert!(error.downcast_ref::<ParseIntError>().is_some());
    /// ```
    ThrowingFunction2(first: A, second: B)
}

throwing_function! {
    /// A fallible function of three arguments.
    ///
    /// Implemented by every `Fn(A, B, C) -> Result<R, E>`.
    ThrowingFunction3(first: A, second: B, third: C)
}
