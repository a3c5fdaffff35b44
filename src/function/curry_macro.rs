//! Currying for two- and three-argument functions.
//!
//! The macros expand to nested `move` closures. The wrapped function is held
//! in an [`Arc`](std::sync::Arc), so every stage is [`Fn`], can be called any
//! number of times, and is `Send + Sync` whenever the function and the
//! captured arguments are. Arguments fixed by an earlier stage are cloned on
//! each call of a later stage.

/// Converts a two-argument function into curried form.
///
/// `curry2!(f)(a)(b) == f(a, b)`
///
/// # Examples
///
/// ```
/// use fnkit::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 {
///     first * second
/// }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a three-argument function into curried form.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`
///
/// # Examples
///
/// ```
/// use fnkit::curry3;
///
/// let volume = |width: u32, height: u32, depth: u32| width * height * depth;
///
/// let curried = curry3!(volume);
/// let flat = curried(4)(5);
///
/// assert_eq!(flat(1), 20);
/// assert_eq!(flat(2), 40);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| {
                let function = ::std::sync::Arc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}
