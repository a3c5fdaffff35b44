//! Predicates: functions returning `bool`.
//!
//! The predicate traits are extension traits over the function family, so
//! any `Fn(..) -> bool` (and any memoized or boxed function returning `bool`)
//! gains `negate`, `and`, `or` and `xor`.
//!
//! The binary combinators evaluate `self` first and short-circuit where the
//! operator allows it. They need the arguments to be [`Clone`] because both
//! predicates may look at them; predicates over references satisfy this for
//! free.

use super::functions::{Function1, Function2, Function3};

/// A predicate over one argument.
///
/// # Laws
///
/// - **Double negation**: `p.negate().negate()` behaves as `p`
/// - **De Morgan**: `p.and(q).negate()` behaves as `p.negate().or(q.negate())`
///
/// # Examples
///
/// ```
/// use fnkit::function::Predicate1;
///
/// let positive = |value: &i32| *value > 0;
/// let even = |value: &i32| value % 2 == 0;
///
/// let positive_even = positive.and(even);
/// assert!(positive_even(&4));
/// assert!(!positive_even(&-4));
/// assert!(!positive_even(&3));
/// ```
pub trait Predicate1<A>: Function1<A, bool> {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, first: A) -> bool {
        self.apply(first)
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> impl Fn(A) -> bool
    where
        Self: Sized,
    {
        move |first| !self.apply(first)
    }

    /// Returns a predicate that holds when both `self` and `other` hold.
    fn and<P>(self, other: P) -> impl Fn(A) -> bool
    where
        Self: Sized,
        P: Fn(A) -> bool,
        A: Clone,
    {
        move |first| self.apply(first.clone()) && other(first)
    }

    /// Returns a predicate that holds when `self` or `other` holds.
    fn or<P>(self, other: P) -> impl Fn(A) -> bool
    where
        Self: Sized,
        P: Fn(A) -> bool,
        A: Clone,
    {
        move |first| self.apply(first.clone()) || other(first)
    }

    /// Returns a predicate that holds when exactly one of `self` and `other` holds.
    fn xor<P>(self, other: P) -> impl Fn(A) -> bool
    where
        Self: Sized,
        P: Fn(A) -> bool,
        A: Clone,
    {
        move |first| self.apply(first.clone()) ^ other(first)
    }
}

impl<A, P> Predicate1<A> for P where P: Function1<A, bool> {}

/// A predicate over two arguments.
pub trait Predicate2<A, B>: Function2<A, B, bool> {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, first: A, second: B) -> bool {
        self.apply(first, second)
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
    {
        move |first, second| !self.apply(first, second)
    }

    /// Returns a predicate that holds when both `self` and `other` hold.
    fn and<P>(self, other: P) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        P: Fn(A, B) -> bool,
        A: Clone,
        B: Clone,
    {
        move |first, second| self.apply(first.clone(), second.clone()) && other(first, second)
    }

    /// Returns a predicate that holds when `self` or `other` holds.
    fn or<P>(self, other: P) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        P: Fn(A, B) -> bool,
        A: Clone,
        B: Clone,
    {
        move |first, second| self.apply(first.clone(), second.clone()) || other(first, second)
    }

    /// Returns a predicate that holds when exactly one of `self` and `other` holds.
    fn xor<P>(self, other: P) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        P: Fn(A, B) -> bool,
        A: Clone,
        B: Clone,
    {
        move |first, second| self.apply(first.clone(), second.clone()) ^ other(first, second)
    }
}

impl<A, B, P> Predicate2<A, B> for P where P: Function2<A, B, bool> {}

/// A predicate over three arguments.
pub trait Predicate3<A, B, C>: Function3<A, B, C, bool> {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, first: A, second: B, third: C) -> bool {
        self.apply(first, second, third)
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
    {
        move |first, second, third| !self.apply(first, second, third)
    }

    /// Returns a predicate that holds when both `self` and `other` hold.
    fn and<P>(self, other: P) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
        P: Fn(A, B, C) -> bool,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first, second, third| {
            self.apply(first.clone(), second.clone(), third.clone()) && other(first, second, third)
        }
    }

    /// Returns a predicate that holds when `self` or `other` holds.
    fn or<P>(self, other: P) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
        P: Fn(A, B, C) -> bool,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first, second, third| {
            self.apply(first.clone(), second.clone(), third.clone()) || other(first, second, third)
        }
    }

    /// Returns a predicate that holds when exactly one of `self` and `other` holds.
    fn xor<P>(self, other: P) -> impl Fn(A, B, C) -> bool
    where
        Self: Sized,
        P: Fn(A, B, C) -> bool,
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first, second, third| {
            self.apply(first.clone(), second.clone(), third.clone()) ^ other(first, second, third)
        }
    }
}

impl<A, B, C, P> Predicate3<A, B, C> for P where P: Function3<A, B, C, bool> {}
