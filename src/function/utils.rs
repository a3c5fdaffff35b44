//! Basic combinators.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument and returns a fixed value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//!
//! [`Function2::reversed`](super::Function2::reversed) is the method form of
//! [`flip`].

/// Returns the value unchanged.
///
/// `f.compose(identity)` and `f.and_then(identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use fnkit::function::{Function1, identity};
///
/// let double = |value: i32| value * 2;
/// assert_eq!(double.compose(identity)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use fnkit::function::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fnkit::function::flip;
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let divide_into = flip(divide);
///
/// assert!((divide_into(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
