//! Lifting functions to a higher arity by ignoring arguments.
//!
//! `only_first2(f)` turns a unary `f` into a binary function that passes its
//! first argument to `f` and drops the second. The numeric suffix is the
//! arity of the function produced.

/// Lifts `function` to two arguments, using only the first.
///
/// # Examples
///
/// ```
/// use fnkit::function::only_first2;
///
/// let length = only_first2(|text: &str| text.len());
/// assert_eq!(length("abc", 99), 3);
/// ```
pub fn only_first2<A, B, R, F>(function: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> R,
{
    move |first, _| function(first)
}

/// Lifts `function` to two arguments, using only the second.
pub fn only_second2<A, B, R, F>(function: F) -> impl Fn(A, B) -> R
where
    F: Fn(B) -> R,
{
    move |_, second| function(second)
}

/// Lifts `function` to three arguments, using only the first.
pub fn only_first3<A, B, C, R, F>(function: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(A) -> R,
{
    move |first, _, _| function(first)
}

/// Lifts `function` to three arguments, using only the second.
pub fn only_second3<A, B, C, R, F>(function: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(B) -> R,
{
    move |_, second, _| function(second)
}

/// Lifts `function` to three arguments, using only the third.
pub fn only_third3<A, B, C, R, F>(function: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(C) -> R,
{
    move |_, _, third| function(third)
}
