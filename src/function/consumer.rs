//! Consumers: functions returning `()`.
//!
//! A consumer is run for its side effect. The extension traits add
//! `accept` and `followed_by`, which runs a second consumer with the same
//! arguments.

use super::functions::{Function1, Function2, Function3};

/// A consumer of one argument.
///
/// # Examples
///
/// ```
/// use fnkit::function::Consumer1;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let record = |value: i32| log.borrow_mut().push(value);
/// let record_twice = record.followed_by(|value: i32| log.borrow_mut().push(value * 10));
///
/// record_twice(4);
/// assert_eq!(*log.borrow(), vec![4, 40]);
/// ```
pub trait Consumer1<A>: Function1<A, ()> {
    /// Runs the consumer.
    #[inline]
    fn accept(&self, first: A) {
        self.apply(first);
    }

    /// Returns a consumer that runs `self` and then `next` with the same argument.
    fn followed_by<G>(self, next: G) -> impl Fn(A)
    where
        Self: Sized,
        G: Fn(A),
        A: Clone,
    {
        move |first| {
            self.apply(first.clone());
            next(first);
        }
    }
}

impl<A, F> Consumer1<A> for F where F: Function1<A, ()> {}

/// A consumer of two arguments.
pub trait Consumer2<A, B>: Function2<A, B, ()> {
    /// Runs the consumer.
    #[inline]
    fn accept(&self, first: A, second: B) {
        self.apply(first, second);
    }

    /// Returns a consumer that runs `self` and then `next` with the same arguments.
    fn followed_by<G>(self, next: G) -> impl Fn(A, B)
    where
        Self: Sized,
        G: Fn(A, B),
        A: Clone,
        B: Clone,
    {
        move |first, second| {
            self.apply(first.clone(), second.clone());
            next(first, second);
        }
    }
}

impl<A, B, F> Consumer2<A, B> for F where F: Function2<A, B, ()> {}

/// A consumer of three arguments.
pub trait Consumer3<A, B, C>: Function3<A, B, C, ()> {
    /// Runs the consumer.
    #[inline]
    fn accept(&self, first: A, second: B, third: C) {
        self.apply(first, second, third);
    }

    /// Returns a consumer that runs `self` and then `next` with the same arguments.
    fn followed_by<G>(self, next: G) -> impl Fn(A, B, C)
    where
        Self: Sized,
        G: Fn(A, B, C),
        A: Clone,
        B: Clone,
        C: Clone,
    {
        move |first, second, third| {
            self.apply(first.clone(), second.clone(), third.clone());
            next(first, second, third);
        }
    }
}

impl<A, B, C, F> Consumer3<A, B, C> for F where F: Function3<A, B, C, ()> {}
