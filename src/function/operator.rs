//! Operators: functions whose inputs and output share one type.

use std::cmp::Ordering;

use super::functions::{Function1, Function2};

/// A function from `T` to `T`.
///
/// # Examples
///
/// ```
/// use fnkit::function::UnaryOperator;
///
/// let double = |value: u32| value * 2;
/// assert_eq!(double.apply_n(1, 10), 1024);
/// ```
pub trait UnaryOperator<T>: Function1<T, T> {
    /// Applies the operator `times` times, starting from `value`.
    fn apply_n(&self, value: T, times: usize) -> T {
        (0..times).fold(value, |accumulator, _| self.apply(accumulator))
    }
}

impl<T, F> UnaryOperator<T> for F where F: Function1<T, T> {}

/// A function combining two `T` values into one.
///
/// # Examples
///
/// ```
/// use fnkit::function::BinaryOperator;
///
/// let add = |left: i32, right: i32| left + right;
/// assert_eq!(add.fold_all(0, [1, 2, 3, 4]), 10);
/// ```
pub trait BinaryOperator<T>: Function2<T, T, T> {
    /// Folds `items` from the left, starting with `initial`.
    fn fold_all<I>(&self, initial: T, items: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .fold(initial, |accumulator, item| self.apply(accumulator, item))
    }
}

impl<T, F> BinaryOperator<T> for F where F: Function2<T, T, T> {}

/// Returns the unary operator that returns its argument unchanged.
#[inline]
pub fn unary_identity<T>() -> impl Fn(T) -> T + Clone + Send + Sync {
    |value| value
}

/// Returns a binary operator yielding the lesser of its arguments under `comparator`.
///
/// When the arguments compare equal the first one is returned.
///
/// # Examples
///
/// ```
/// use fnkit::function::min_by;
///
/// let shortest = min_by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
/// assert_eq!(shortest("pear", "fig"), "fig");
/// assert_eq!(shortest("one", "two"), "one");
/// ```
pub fn min_by<T, C>(comparator: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |left, right| {
        if comparator(&left, &right) == Ordering::Greater {
            right
        } else {
            left
        }
    }
}

/// Returns a binary operator yielding the greater of its arguments under `comparator`.
///
/// When the arguments compare equal the first one is returned.
pub fn max_by<T, C>(comparator: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |left, right| {
        if comparator(&left, &right) == Ordering::Less {
            right
        } else {
            left
        }
    }
}

/// Returns a binary operator yielding the lesser of its arguments.
pub fn min<T: Ord>() -> impl Fn(T, T) -> T {
    min_by(T::cmp)
}

/// Returns a binary operator yielding the greater of its arguments.
pub fn max<T: Ord>() -> impl Fn(T, T) -> T {
    max_by(T::cmp)
}
