#![cfg(feature = "function")]
//! Integration tests for the function family and its roles.

use fnkit::function::*;
use fnkit::{curry2, curry3};
use rstest::rstest;
use std::cell::RefCell;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Function0 .. Function3
// =============================================================================

#[rstest]
fn test_function0_and_then_consume() {
    let answer = || 42;
    let described = answer.and_then(|value: i32| format!("answer={value}"));
    assert_eq!(described(), "answer=42");

    let seen = RefCell::new(Vec::new());
    let report = answer.consume(|value: i32| seen.borrow_mut().push(value));
    report();
    report();
    assert_eq!(*seen.borrow(), vec![42, 42]);
}

#[rstest]
#[case(0, 1)]
#[case(4, 41)]
#[case(-3, -29)]
fn test_function1_compose_runs_before_first(#[case] input: i32, #[case] expected: i32) {
    let add_one = |value: i32| value + 1;
    let composed = add_one.compose(|value: i32| value * 10);
    assert_eq!(composed(input), expected);
}

#[rstest]
fn test_function1_of_and_call() {
    let length = <_ as Function1<&str, usize>>::of(|text: &str| text.len());
    assert_eq!(Function1::call(&length, "four"), 4);
    assert_eq!(length.arity(), 1);
}

#[rstest]
fn test_arity_constants() {
    assert_eq!((|| ()).arity(), 0);
    assert_eq!((|first: u8| first).arity(), 1);
    assert_eq!((|first: u8, second: u8| first + second).arity(), 2);
    assert_eq!((|first: u8, second: u8, third: u8| first + second + third).arity(), 3);
}

#[rstest]
fn test_function2_compose_adapts_each_argument() {
    let concat = |left: String, right: String| format!("{left}{right}");
    let numbers = concat.compose(|value: i32| value.to_string(), |value: f64| format!("{value:.1}"));
    assert_eq!(numbers(7, 2.5), "72.5");
}

#[rstest]
fn test_function2_partial_application() {
    let subtract = |left: i32, right: i32| left - right;
    let from_ten = subtract.partial_first(10);
    let minus_ten = subtract.partial_second(10);

    assert_eq!(from_ten(3), 7);
    assert_eq!(minus_ten(3), -7);
}

#[rstest]
fn test_function2_reversed() {
    let divide = |numerator: f64, denominator: f64| numerator / denominator;
    let divide_into = divide.reversed();
    assert!((divide_into(4.0, 2.0) - 0.5).abs() < f64::EPSILON);
}

#[rstest]
fn test_function3_partials_and_reversed() {
    let describe = |name: &str, age: u32, city: &str| format!("{name}/{age}/{city}");

    assert_eq!(describe.partial_first("ann")(30, "oslo"), "ann/30/oslo");
    assert_eq!(describe.partial_second(30)("ann", "oslo"), "ann/30/oslo");
    assert_eq!(describe.partial_third("oslo")("ann", 30), "ann/30/oslo");
    assert_eq!(describe.reversed()("oslo", 30, "ann"), "ann/30/oslo");
}

#[rstest]
fn test_boxed_functions_are_uniform() {
    let operations: Vec<BoxedFunction2<i64, i64, i64>> = vec![
        (|left: i64, right: i64| left + right).boxed(),
        (|left: i64, right: i64| left * right).boxed(),
        (|left: i64, right: i64| left.max(right)).boxed(),
    ];

    let results: Vec<i64> = operations.iter().map(|operation| operation(6, 7)).collect();
    assert_eq!(results, vec![13, 42, 7]);
}

#[rstest]
fn test_boxed_function_crosses_threads() {
    let shout: BoxedFunction1<String, String> = (|text: String| text.to_uppercase()).boxed();
    let shout = Arc::new(shout);

    let handles: Vec<_> = ["a", "b"]
        .into_iter()
        .map(|text| {
            let shout = Arc::clone(&shout);
            thread::spawn(move || shout(text.to_string()))
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, vec!["A", "B"]);
}

// =============================================================================
// Utilities and partial helpers
// =============================================================================

#[rstest]
fn test_identity_constant_flip() {
    assert_eq!(identity("same"), "same");

    let always_seven = constant::<u8, &str>(7);
    assert_eq!(always_seven("anything"), 7);

    let power = |base: u32, exponent: u32| base.pow(exponent);
    assert_eq!(flip(power)(3, 2), 8);
}

#[rstest]
fn test_only_helpers_ignore_other_arguments() {
    let negate = |value: i32| -value;

    assert_eq!(only_first2(negate)(1, "ignored"), -1);
    assert_eq!(only_second2(negate)("ignored", 2), -2);
    assert_eq!(only_first3(negate)(3, (), ()), -3);
    assert_eq!(only_second3(negate)((), 4, ()), -4);
    assert_eq!(only_third3(negate)((), (), 5), -5);
}

#[rstest]
fn test_curry_matches_uncurried_call() {
    let area = |width: u32, height: u32| width * height;
    assert_eq!(curry2!(area)(3)(4), area(3, 4));

    let clamp = |low: i32, high: i32, value: i32| value.clamp(low, high);
    let percent = curry3!(clamp)(0)(100);
    assert_eq!(percent(-5), 0);
    assert_eq!(percent(55), 55);
    assert_eq!(percent(120), 100);
}

// =============================================================================
// Roles
// =============================================================================

#[rstest]
#[case(4, true)]
#[case(3, false)]
#[case(-4, false)]
#[case(0, false)]
fn test_predicate_and(#[case] value: i32, #[case] expected: bool) {
    let positive = |value: &i32| *value > 0;
    let even = |value: &i32| value % 2 == 0;
    assert_eq!(positive.and(even).test(&value), expected);
}

#[rstest]
fn test_predicate_short_circuits() {
    let evaluated = RefCell::new(0);
    let never = |_: &i32| false;
    let counting = |_: &i32| {
        *evaluated.borrow_mut() += 1;
        true
    };

    assert!(!never.and(counting).test(&1));
    assert_eq!(*evaluated.borrow(), 0);
}

#[rstest]
fn test_predicate2_and_predicate3() {
    let divides = |divisor: u32, value: u32| divisor != 0 && value % divisor == 0;
    assert!(divides.negate().test(3, 10));
    assert!(divides.or(|divisor: u32, _: u32| divisor == 0).test(0, 10));

    let ordered = |low: i32, middle: i32, high: i32| low <= middle && middle <= high;
    let strictly_equal = |low: i32, middle: i32, high: i32| low == middle && middle == high;
    assert!(ordered.xor(strictly_equal).test(1, 2, 3));
    assert!(!ordered.xor(strictly_equal).test(2, 2, 2));
}

#[rstest]
fn test_consumers_run_in_order() {
    let log = RefCell::new(Vec::new());
    let first = |entry: &str| log.borrow_mut().push(format!("first:{entry}"));
    let second = |entry: &str| log.borrow_mut().push(format!("second:{entry}"));

    first.followed_by(second).accept("x");
    assert_eq!(*log.borrow(), vec!["first:x", "second:x"]);
}

#[rstest]
fn test_operators() {
    let increment = |value: u64| value + 1;
    assert_eq!(increment.apply_n(0, 5), 5);
    assert_eq!(unary_identity::<&str>()("kept"), "kept");

    let longest = max_by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
    assert_eq!(longest.fold_all("", ["ab", "abc", "xyz", "a"]), "abc");

    assert_eq!(min::<i32>().fold_all(i32::MAX, [5, -2, 9]), -2);
    assert_eq!(max::<i32>()(5, 9), 9);
    assert_eq!(min_by(|left: &i32, right: &i32| left.abs().cmp(&right.abs()))(-3, 2), 2);
}

#[rstest]
fn test_primitive_aliases() {
    let is_vowel: CharPredicate = Box::new(|letter: char| "aeiou".contains(letter));
    let halve: DoubleUnaryOperator = Box::new(|value: f64| value / 2.0);
    let count: ToIntFunction<&'static str> = Box::new(|text: &str| i32::try_from(text.len()).unwrap_or(i32::MAX));

    assert!(is_vowel('e'));
    assert!((halve(3.0) - 1.5).abs() < f64::EPSILON);
    assert_eq!(count("four"), 4);
}
