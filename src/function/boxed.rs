//! Boxed siblings of the function family and their primitive specializations.
//!
//! A boxed function erases the concrete closure type behind a
//! `Box<dyn Fn .. + Send + Sync>`, so differently-built functions of one shape
//! can be stored together. Boxed functions implement the function traits
//! themselves, so every adapter keeps working on them.
//!
//! For each of the eight primitive kinds the module also exposes named
//! aliases in the style of `IntFunction<R>` or `DoubleBinaryOperator`:
//!
//! | Primitive | Prefix   |
//! |-----------|----------|
//! | `bool`    | `Bool`   |
//! | `i8`      | `Byte`   |
//! | `char`    | `Char`   |
//! | `f64`     | `Double` |
//! | `f32`     | `Float`  |
//! | `i32`     | `Int`    |
//! | `i64`     | `Long`   |
//! | `i16`     | `Short`  |
//!
//! # Examples
//!
//! ```
//! use fnkit::function::{Function1, Function2, IntPredicate, LongBinaryOperator, ToDoubleFunction};
//!
//! let even: IntPredicate = (|value: i32| value % 2 == 0).boxed();
//! let sum: LongBinaryOperator = (|left: i64, right: i64| left + right).boxed();
//! let length: ToDoubleFunction<String> = (|text: String| text.len() as f64).boxed();
//!
//! assert!(even(4));
//! assert_eq!(sum(40, 2), 42);
//! assert!((length("abc".to_string()) - 3.0).abs() < f64::EPSILON);
//! ```

/// Boxed function of no arguments.
pub type BoxedFunction0<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Boxed function of one argument.
pub type BoxedFunction1<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

/// Boxed function of two arguments.
pub type BoxedFunction2<A, B, R> = Box<dyn Fn(A, B) -> R + Send + Sync>;

/// Boxed function of three arguments.
pub type BoxedFunction3<A, B, C, R> = Box<dyn Fn(A, B, C) -> R + Send + Sync>;

/// Boxed predicate of one argument.
pub type BoxedPredicate1<A> = BoxedFunction1<A, bool>;

/// Boxed predicate of two arguments.
pub type BoxedPredicate2<A, B> = BoxedFunction2<A, B, bool>;

/// Boxed predicate of three arguments.
pub type BoxedPredicate3<A, B, C> = BoxedFunction3<A, B, C, bool>;

/// Boxed consumer of one argument.
pub type BoxedConsumer1<A> = BoxedFunction1<A, ()>;

/// Boxed consumer of two arguments.
pub type BoxedConsumer2<A, B> = BoxedFunction2<A, B, ()>;

/// Boxed consumer of three arguments.
pub type BoxedConsumer3<A, B, C> = BoxedFunction3<A, B, C, ()>;

/// Boxed operator from `T` to `T`.
pub type BoxedUnaryOperator<T> = BoxedFunction1<T, T>;

/// Boxed operator combining two `T` values into one.
pub type BoxedBinaryOperator<T> = BoxedFunction2<T, T, T>;

macro_rules! primitive_family {
    ($($primitive:ident => $name:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = "Supplier of `" $primitive "` values."]
                pub type [<$name Supplier>] = BoxedFunction0<$primitive>;

                #[doc = "Function from `" $primitive "` to `R`."]
                pub type [<$name Function>]<R> = BoxedFunction1<$primitive, R>;

                #[doc = "Function from `A` to `" $primitive "`."]
                pub type [<To $name Function>]<A> = BoxedFunction1<A, $primitive>;

                #[doc = "Function from `A` and `B` to `" $primitive "`."]
                pub type [<To $name BiFunction>]<A, B> = BoxedFunction2<A, B, $primitive>;

                #[doc = "Predicate over `" $primitive "` values."]
                pub type [<$name Predicate>] = BoxedPredicate1<$primitive>;

                #[doc = "Predicate over two `" $primitive "` values."]
                pub type [<$name BiPredicate>] = BoxedPredicate2<$primitive, $primitive>;

                #[doc = "Consumer of `" $primitive "` values."]
                pub type [<$name Consumer>] = BoxedConsumer1<$primitive>;

                #[doc = "Consumer of an `A` together with a `" $primitive "`."]
                pub type [<Obj $name Consumer>]<A> = BoxedConsumer2<A, $primitive>;

                #[doc = "Operator from `" $primitive "` to `" $primitive "`."]
                pub type [<$name UnaryOperator>] = BoxedUnaryOperator<$primitive>;

                #[doc = "Operator combining two `" $primitive "` values."]
                pub type [<$name BinaryOperator>] = BoxedBinaryOperator<$primitive>;
            )*
        }
    };
}

primitive_family! {
    bool => Bool,
    i8 => Byte,
    char => Char,
    f64 => Double,
    f32 => Float,
    i32 => Int,
    i64 => Long,
    i16 => Short,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Function0, Function1, Function2};
    use rstest::rstest;

    #[rstest]
    fn primitive_aliases_accept_boxed_closures() {
        let supplier: CharSupplier = (|| 'x').boxed();
        let to_string: ByteFunction<String> = (|value: i8| value.to_string()).boxed();
        let negate: BoolUnaryOperator = (|value: bool| !value).boxed();
        let longest: ShortBinaryOperator = (|left: i16, right: i16| left.max(right)).boxed();

        assert_eq!(supplier(), 'x');
        assert_eq!(to_string(-3), "-3");
        assert!(negate(false));
        assert_eq!(longest(3, 7), 7);
    }

    #[rstest]
    fn boxed_functions_keep_their_adapters() {
        let halve: FloatUnaryOperator = (|value: f32| value / 2.0).boxed();
        let described = halve.and_then(|value| format!("{value:.1}"));

        assert_eq!(described(5.0), "2.5");
    }

    #[rstest]
    fn boxed_functions_can_be_stored_together() {
        let operations: Vec<IntBinaryOperator> = vec![
            (|left: i32, right: i32| left + right).boxed(),
            (|left: i32, right: i32| left * right).boxed(),
            Box::new(|left: i32, right: i32| left - right),
        ];

        let results: Vec<i32> = operations.iter().map(|operation| operation(6, 3)).collect();
        assert_eq!(results, vec![9, 18, 3]);
    }
}
