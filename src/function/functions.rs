//! Function traits for arities 0 through 3.
//!
//! Each trait has exactly one required method, `apply`, and a blanket
//! implementation for every `Fn` of the matching shape. Everything else is a
//! provided method that builds a new closure around `self`.

use super::boxed::{BoxedFunction0, BoxedFunction1, BoxedFunction2, BoxedFunction3};

/// A function taking no arguments and producing an `R`.
///
/// This is the supplier shape. Any `Fn() -> R` implements it.
///
/// # Examples
///
/// ```
/// use fnkit::function::Function0;
///
/// let answer = || 21;
/// let doubled = answer.and_then(|value| value * 2);
///
/// assert_eq!(doubled(), 42);
/// assert_eq!(answer.arity(), 0);
/// ```
pub trait Function0<R> {
    /// The number of arguments this function accepts.
    const ARITY: usize = 0;

    /// Invokes the function.
    fn apply(&self) -> R;

    /// Returns the number of arguments, always `0`.
    #[inline]
    fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Identity constructor that fixes the type of `function`.
    #[inline]
    fn of(function: Self) -> Self
    where
        Self: Sized,
    {
        function
    }

    /// Invokes `function`.
    #[inline]
    fn call(function: &Self) -> R
    where
        Self: Sized,
    {
        function.apply()
    }

    /// Returns a function that runs `self` and passes its result to `after`.
    fn and_then<V, G>(self, after: G) -> impl Fn() -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move || after(self.apply())
    }

    /// Returns a function that runs `self` and hands its result to `consumer`.
    fn consume<G>(self, consumer: G) -> impl Fn()
    where
        Self: Sized,
        G: Fn(R),
    {
        move || consumer(self.apply())
    }

    /// Lifts this function into the fallible family; the result is always `Ok`.
    fn throwing<E>(self) -> impl Fn() -> Result<R, E>
    where
        Self: Sized,
    {
        move || Ok(self.apply())
    }

    /// Converts this function into its boxed sibling.
    fn boxed(self) -> BoxedFunction0<R>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(move || self.apply())
    }
}

impl<R, F> Function0<R> for F
where
    F: Fn() -> R,
{
    #[inline]
    fn apply(&self) -> R {
        self()
    }
}

/// A function taking one argument of type `A` and producing an `R`.
///
/// # Laws
///
/// - **Identity**: `f.compose(identity)` behaves as `f`
/// - **Associativity**: `f.compose(g).compose(h)` behaves as
///   `f.compose(g.compose(h))`
///
/// # Examples
///
/// ```
/// use fnkit::function::Function1;
///
/// let length = |text: String| text.len();
/// let is_long = length.and_then(|count| count > 3);
///
/// assert!(is_long("fnkit".to_string()));
/// assert!(!is_long("fn".to_string()));
/// ```
pub trait Function1<A, R> {
    /// The number of arguments this function accepts.
    const ARITY: usize = 1;

    /// Invokes the function.
    fn apply(&self, first: A) -> R;

    /// Returns the number of arguments, always `1`.
    #[inline]
    fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Identity constructor that fixes the type of `function`.
    #[inline]
    fn of(function: Self) -> Self
    where
        Self: Sized,
    {
        function
    }

    /// Invokes `function` with `first`.
    #[inline]
    fn call(function: &Self, first: A) -> R
    where
        Self: Sized,
    {
        function.apply(first)
    }

    /// Returns a function that runs `before` and feeds its result to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::function::Function1;
    ///
    /// let add_one = |value: i32| value + 1;
    /// let composed = add_one.compose(|value: i32| value * 10);
    ///
    /// assert_eq!(composed(4), 41);
    /// ```
    fn compose<V, G>(self, before: G) -> impl Fn(V) -> R
    where
        Self: Sized,
        G: Fn(V) -> A,
    {
        move |value| self.apply(before(value))
    }

    /// Returns a function that runs `self` and passes its result to `after`.
    fn and_then<V, G>(self, after: G) -> impl Fn(A) -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move |first| after(self.apply(first))
    }

    /// Returns a consumer that runs `self` and hands its result to `consumer`.
    fn consume<G>(self, consumer: G) -> impl Fn(A)
    where
        Self: Sized,
        G: Fn(R),
    {
        move |first| consumer(self.apply(first))
    }

    /// Lifts this function into the fallible family; the result is always `Ok`.
    fn throwing<E>(self) -> impl Fn(A) -> Result<R, E>
    where
        Self: Sized,
    {
        move |first| Ok(self.apply(first))
    }

    /// Converts this function into its boxed sibling.
    fn boxed(self) -> BoxedFunction1<A, R>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(move |first| self.apply(first))
    }
}

impl<A, R, F> Function1<A, R> for F
where
    F: Fn(A) -> R,
{
    #[inline]
    fn apply(&self, first: A) -> R {
        self(first)
    }
}

/// A function taking two arguments and producing an `R`.
///
/// # Examples
///
/// ```
/// use fnkit::function::Function2;
///
/// let power = |base: i64, exponent: u32| base.pow(exponent);
///
/// let cube = power.partial_second(3);
/// assert_eq!(cube(2), 8);
///
/// let square_of = power.reversed().partial_first(2);
/// assert_eq!(square_of(5), 25);
/// ```
pub trait Function2<A, B, R> {
    /// The number of arguments this function accepts.
    const ARITY: usize = 2;

    /// Invokes the function.
    fn apply(&self, first: A, second: B) -> R;

    /// Returns the number of arguments, always `2`.
    #[inline]
    fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Identity constructor that fixes the type of `function`.
    #[inline]
    fn of(function: Self) -> Self
    where
        Self: Sized,
    {
        function
    }

    /// Invokes `function` with the given arguments.
    #[inline]
    fn call(function: &Self, first: A, second: B) -> R
    where
        Self: Sized,
    {
        function.apply(first, second)
    }

    /// Returns a function that adapts each argument before calling `self`.
    fn compose<V1, V2, G1, G2>(self, first: G1, second: G2) -> impl Fn(V1, V2) -> R
    where
        Self: Sized,
        G1: Fn(V1) -> A,
        G2: Fn(V2) -> B,
    {
        move |value1, value2| self.apply(first(value1), second(value2))
    }

    /// Returns a function that runs `self` and passes its result to `after`.
    fn and_then<V, G>(self, after: G) -> impl Fn(A, B) -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move |first, second| after(self.apply(first, second))
    }

    /// Returns a consumer that runs `self` and hands its result to `consumer`.
    fn consume<G>(self, consumer: G) -> impl Fn(A, B)
    where
        Self: Sized,
        G: Fn(R),
    {
        move |first, second| consumer(self.apply(first, second))
    }

    /// Fixes the first argument.
    fn partial_first(self, first: A) -> impl Fn(B) -> R
    where
        Self: Sized,
        A: Clone,
    {
        move |second| self.apply(first.clone(), second)
    }

    /// Fixes the second argument.
    fn partial_second(self, second: B) -> impl Fn(A) -> R
    where
        Self: Sized,
        B: Clone,
    {
        move |first| self.apply(first, second.clone())
    }

    /// Returns a function taking the arguments in reverse order.
    ///
    /// Reversing twice yields a function equivalent to `self`.
    fn reversed(self) -> impl Fn(B, A) -> R
    where
        Self: Sized,
    {
        move |second, first| self.apply(first, second)
    }

    /// Lifts this function into the fallible family; the result is always `Ok`.
    fn throwing<E>(self) -> impl Fn(A, B) -> Result<R, E>
    where
        Self: Sized,
    {
        move |first, second| Ok(self.apply(first, second))
    }

    /// Converts this function into its boxed sibling.
    fn boxed(self) -> BoxedFunction2<A, B, R>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(move |first, second| self.apply(first, second))
    }
}

impl<A, B, R, F> Function2<A, B, R> for F
where
    F: Fn(A, B) -> R,
{
    #[inline]
    fn apply(&self, first: A, second: B) -> R {
        self(first, second)
    }
}

/// A function taking three arguments and producing an `R`.
///
/// # Examples
///
/// ```
/// use fnkit::function::{Function2, Function3};
///
/// let clamp = |value: i32, low: i32, high: i32| value.max(low).min(high);
///
/// let to_percent = clamp.partial_second(0).partial_second(100);
/// assert_eq!(to_percent(140), 100);
/// assert_eq!(to_percent(-3), 0);
/// ```
pub trait Function3<A, B, C, R> {
    /// The number of arguments this function accepts.
    const ARITY: usize = 3;

    /// Invokes the function.
    fn apply(&self, first: A, second: B, third: C) -> R;

    /// Returns the number of arguments, always `3`.
    #[inline]
    fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Identity constructor that fixes the type of `function`.
    #[inline]
    fn of(function: Self) -> Self
    where
        Self: Sized,
    {
        function
    }

    /// Invokes `function` with the given arguments.
    #[inline]
    fn call(function: &Self, first: A, second: B, third: C) -> R
    where
        Self: Sized,
    {
        function.apply(first, second, third)
    }

    /// Returns a function that adapts each argument before calling `self`.
    fn compose<V1, V2, V3, G1, G2, G3>(
        self,
        first: G1,
        second: G2,
        third: G3,
    ) -> impl Fn(V1, V2, V3) -> R
    where
        Self: Sized,
        G1: Fn(V1) -> A,
        G2: Fn(V2) -> B,
        G3: Fn(V3) -> C,
    {
        move |value1, value2, value3| self.apply(first(value1), second(value2), third(value3))
    }

    /// Returns a function that runs `self` and passes its result to `after`.
    fn and_then<V, G>(self, after: G) -> impl Fn(A, B, C) -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move |first, second, third| after(self.apply(first, second, third))
    }

    /// Returns a consumer that runs `self` and hands its result to `consumer`.
    fn consume<G>(self, consumer: G) -> impl Fn(A, B, C)
    where
        Self: Sized,
        G: Fn(R),
    {
        move |first, second, third| consumer(self.apply(first, second, third))
    }

    /// Fixes the first argument.
    fn partial_first(self, first: A) -> impl Fn(B, C) -> R
    where
        Self: Sized,
        A: Clone,
    {
        move |second, third| self.apply(first.clone(), second, third)
    }

    /// Fixes the second argument.
    fn partial_second(self, second: B) -> impl Fn(A, C) -> R
    where
        Self: Sized,
        B: Clone,
    {
        move |first, third| self.apply(first, second.clone(), third)
    }

    /// Fixes the third argument.
    fn partial_third(self, third: C) -> impl Fn(A, B) -> R
    where
        Self: Sized,
        C: Clone,
    {
        move |first, second| self.apply(first, second, third.clone())
    }

    /// Returns a function taking the arguments in reverse order.
    fn reversed(self) -> impl Fn(C, B, A) -> R
    where
        Self: Sized,
    {
        move |third, second, first| self.apply(first, second, third)
    }

    /// Lifts this function into the fallible family; the result is always `Ok`.
    fn throwing<E>(self) -> impl Fn(A, B, C) -> Result<R, E>
    where
        Self: Sized,
    {
        move |first, second, third| Ok(self.apply(first, second, third))
    }

    /// Converts this function into its boxed sibling.
    fn boxed(self) -> BoxedFunction3<A, B, C, R>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(move |first, second, third| self.apply(first, second, third))
    }
}

impl<A, B, C, R, F> Function3<A, B, C, R> for F
where
    F: Fn(A, B, C) -> R,
{
    #[inline]
    fn apply(&self, first: A, second: B, third: C) -> R {
        self(first, second, third)
    }
}
