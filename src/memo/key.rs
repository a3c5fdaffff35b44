//! Mapping of function arguments to cache keys.
//!
//! A memoized wrapper never stores its arguments directly. Each argument is
//! mapped through [`MemoKey`] to a value that is `Eq + Hash + Clone`, and the
//! tuple of those values keys the cache. Most types key by a clone of
//! themselves; floating-point numbers key by their bit pattern, so they can
//! be memoized even though `f32` and `f64` implement neither `Eq` nor `Hash`.
//!
//! # Floating-point keys
//!
//! Two floats are the same key when they have the same bits, with every
//! `NaN` collapsed to one canonical pattern:
//!
//! - all `NaN` values share a single cache entry;
//! - `0.0` and `-0.0` are distinct keys.
//!
//! # Custom types
//!
//! Types that are already `Eq + Hash + Clone` opt in with [`memo_key!`](crate::memo_key):
//!
//! ```rust
//! use fnkit::memo_key;
//! use fnkit::prelude::*;
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! memo_key!(Point);
//!
//! let distance = (|point: Point| point.x.abs() + point.y.abs()).memoized();
//! assert_eq!(distance.apply(Point { x: 3, y: -4 }), 7);
//! ```

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A type usable as a memoized function argument.
pub trait MemoKey {
    /// The hashable value stored in the cache for this argument.
    type Key: Eq + Hash + Clone;

    /// Returns the cache key for `self`.
    fn memo_key(&self) -> Self::Key;
}

/// Implements [`MemoKey`](crate::memo::MemoKey) for types that are their own key.
///
/// Each listed type must be `Eq + Hash + Clone`.
#[macro_export]
macro_rules! memo_key {
    ($($key:ty),+ $(,)?) => {
        $(
            impl $crate::memo::MemoKey for $key {
                type Key = Self;

                #[inline]
                fn memo_key(&self) -> Self {
                    ::std::clone::Clone::clone(self)
                }
            }
        )+
    };
}

memo_key!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    std::num::NonZeroU32,
    std::num::NonZeroU64,
    std::num::NonZeroUsize,
    std::time::Duration,
    std::cmp::Ordering,
);

impl MemoKey for str {
    type Key = String;

    fn memo_key(&self) -> String {
        self.to_owned()
    }
}

impl MemoKey for f64 {
    type Key = u64;

    fn memo_key(&self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl MemoKey for f32 {
    type Key = u32;

    fn memo_key(&self) -> u32 {
        if self.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl<T: MemoKey + ?Sized> MemoKey for &T {
    type Key = T::Key;

    #[inline]
    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for Box<T> {
    type Key = T::Key;

    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for Rc<T> {
    type Key = T::Key;

    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey + ?Sized> MemoKey for Arc<T> {
    type Key = T::Key;

    fn memo_key(&self) -> T::Key {
        (**self).memo_key()
    }
}

impl<T: MemoKey> MemoKey for Option<T> {
    type Key = Option<T::Key>;

    fn memo_key(&self) -> Self::Key {
        self.as_ref().map(MemoKey::memo_key)
    }
}

impl<T: MemoKey, E: MemoKey> MemoKey for Result<T, E> {
    type Key = Result<T::Key, E::Key>;

    fn memo_key(&self) -> Self::Key {
        self.as_ref().map(MemoKey::memo_key).map_err(MemoKey::memo_key)
    }
}

impl<T: MemoKey> MemoKey for [T] {
    type Key = Vec<T::Key>;

    fn memo_key(&self) -> Self::Key {
        self.iter().map(MemoKey::memo_key).collect()
    }
}

impl<T: MemoKey> MemoKey for Vec<T> {
    type Key = Vec<T::Key>;

    fn memo_key(&self) -> Self::Key {
        self.as_slice().memo_key()
    }
}

impl<T: MemoKey, const N: usize> MemoKey for [T; N] {
    type Key = Vec<T::Key>;

    fn memo_key(&self) -> Self::Key {
        self.as_slice().memo_key()
    }
}

macro_rules! tuple_memo_key {
    ($($element:ident . $index:tt),+) => {
        impl<$($element: MemoKey),+> MemoKey for ($($element,)+) {
            type Key = ($($element::Key,)+);

            fn memo_key(&self) -> Self::Key {
                ($(self.$index.memo_key(),)+)
            }
        }
    };
}

tuple_memo_key!(A.0);
tuple_memo_key!(A.0, B.1);
tuple_memo_key!(A.0, B.1, C.2);
tuple_memo_key!(A.0, B.1, C.2, D.3);
