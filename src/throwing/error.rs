//! Error types produced by the throwing-function adapters.
//!
//! - [`NestedError`]: the carrier built by `nest()`. Its message is the
//!   original error's message and its `source()` is the original error.
//! - [`SneakyError`]: the type-erased error returned by `sneaky_throw()`.
//!   Downcasting yields exactly the original error value.
//! - [`MissingFallbackError`]: returned by `try_recover()` when the recovery
//!   function produced no fallback.

use std::any::type_name;
use std::error::Error;
use std::fmt;

/// A type-erased error that still is the original error value.
///
/// # Examples
///
/// ```rust
/// use fnkit::throwing::SneakyError;
/// use std::num::ParseIntError;
///
/// let original = "x".parse::<i32>().unwrap_err();
/// let erased: SneakyError = original.clone().into();
///
/// assert_eq!(erased.downcast_ref::<ParseIntError>(), Some(&original));
/// ```
pub type SneakyError = Box<dyn Error + Send + Sync + 'static>;

/// Carrier error produced by `nest()`.
///
/// Holds the message of the original error and the original error itself as
/// its [`source`](Error::source).
///
/// # Examples
///
/// ```rust
/// use fnkit::throwing::NestedError;
/// use std::error::Error;
///
/// let original = "x".parse::<i32>().unwrap_err();
/// let nested = NestedError::new(original.clone());
///
/// assert_eq!(nested.to_string(), original.to_string());
/// assert!(nested.source().is_some());
/// ```
#[derive(Debug)]
pub struct NestedError {
    message: String,
    source: SneakyError,
}

impl NestedError {
    /// Wraps `error`, taking its message from its `Display` output.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            source: Box::new(error),
        }
    }

    /// Wraps `error` under a custom message.
    pub fn with_message<M, E>(message: M, error: E) -> Self
    where
        M: Into<String>,
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Box::new(error),
        }
    }

    /// Returns the carried message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a reference to the original error if it is of type `E`.
    pub fn source_as<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.source.downcast_ref::<E>()
    }

    /// Consumes the carrier and returns the original error.
    pub fn into_source(self) -> SneakyError {
        self.source
    }
}

impl fmt::Display for NestedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl Error for NestedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Returned by `try_recover()` when the recovery function yields no fallback.
///
/// Names the type and message of the error that triggered recovery and keeps
/// that error as its source.
///
/// # Examples
///
/// ```rust
/// use fnkit::throwing::MissingFallbackError;
///
/// let original = "x".parse::<u8>().unwrap_err();
/// let error = MissingFallbackError::new(original);
///
/// assert!(error.error_type().ends_with("ParseIntError"));
/// assert!(error.to_string().ends_with("ParseIntError: invalid digit found in string"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFallbackError<E> {
    error_type: &'static str,
    message: String,
    source: E,
}

impl<E: fmt::Display> MissingFallbackError<E> {
    /// Records `source` as the error for which no fallback was found.
    pub fn new(source: E) -> Self {
        Self {
            error_type: type_name::<E>(),
            message: source.to_string(),
            source,
        }
    }
}

impl<E> MissingFallbackError<E> {
    /// Returns the type name of the original error.
    pub const fn error_type(&self) -> &'static str {
        self.error_type
    }

    /// Returns the message of the original error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original error.
    pub const fn original(&self) -> &E {
        &self.source
    }

    /// Consumes `self` and returns the original error.
    pub fn into_original(self) -> E {
        self.source
    }
}

impl<E> fmt::Display for MissingFallbackError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "no fallback for {}: {}",
            self.error_type, self.message
        )
    }
}

impl<E> Error for MissingFallbackError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
