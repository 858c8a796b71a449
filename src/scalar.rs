//! Boundary value traits.
//!
//! Intervals are generic over a scalar type `T`. What an interval can do
//! depends on which of these traits `T` implements:
//!
//! | Trait        | Unlocks                                                     |
//! |--------------|-------------------------------------------------------------|
//! | [`Scalar`]   | construction, containment, relations, union, intersection   |
//! | [`Infinite`] | unbounded factories, complement, difference, xor            |
//! | [`Numeric`]  | length, midpoint, distance, measure, density                |
//! | [`Discrete`] | successor adjacency and closed-form coalescing              |
//!
//! Gating happens at compile time: calling `complement()` on an
//! `IntervalSet<i32>` is a type error, not a runtime failure.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// A totally-ordered, copyable boundary value.
///
/// `PartialOrd` is accepted so that floats qualify; incomparable values
/// (NaN) never satisfy `lower <= upper` and therefore only ever produce the
/// empty interval.
pub trait Scalar: Copy + PartialOrd {
    /// Returns true if this value is one of the domain's infinity sentinels.
    ///
    /// Infinite bounds are always treated as open.
    fn is_infinite(&self) -> bool {
        false
    }
}

/// A scalar whose domain is closed off by infinity sentinels.
pub trait Infinite: Scalar {
    fn infinity() -> Self;
    fn neg_infinity() -> Self;
}

/// A scalar with a notion of distance.
pub trait Numeric: Scalar + Add<Output = Self> + Sub<Output = Self> {
    fn zero() -> Self;

    /// Half of `self`, truncated toward zero for integers.
    fn half(self) -> Self;

    /// Lossy conversion used for ratios such as [`density`].
    ///
    /// [`density`]: crate::IntervalSet::density
    fn to_f64(self) -> f64;
}

/// A scalar with a successor and predecessor for every value except the
/// extremes of the type.
pub trait Discrete: Scalar {
    fn successor(self) -> Option<Self>;
    fn predecessor(self) -> Option<Self>;
}

/// Returns the smaller of two scalars, `a` when they are equal or incomparable.
pub(crate) fn partial_min<T: Scalar>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

/// Returns the larger of two scalars, `a` when they are equal or incomparable.
pub(crate) fn partial_max<T: Scalar>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

macro_rules! impl_integer_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {}

            impl Numeric for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn half(self) -> Self {
                    self / 2
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl Discrete for $t {
                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn predecessor(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_infinite(&self) -> bool {
                    $t::is_infinite(*self)
                }
            }

            impl Infinite for $t {
                #[inline]
                fn infinity() -> Self {
                    $t::INFINITY
                }

                #[inline]
                fn neg_infinity() -> Self {
                    $t::NEG_INFINITY
                }
            }

            impl Numeric for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn half(self) -> Self {
                    self / 2.0
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_never_infinite() {
        assert!(!i32::MAX.is_infinite());
        assert!(!u8::MIN.is_infinite());
    }

    #[test]
    fn float_infinity_sentinels() {
        assert!(<f64 as Infinite>::infinity().is_infinite());
        assert!(<f64 as Infinite>::neg_infinity() < 0.0);
        assert!(!Scalar::is_infinite(&1.0_f64));
        assert!(!Scalar::is_infinite(&f32::NAN));
    }

    #[test]
    fn successor_is_total_at_the_limits() {
        assert_eq!(5_i32.successor(), Some(6));
        assert_eq!(i32::MAX.successor(), None);
        assert_eq!(0_u32.predecessor(), None);
        assert_eq!(10_u32.predecessor(), Some(9));
    }

    #[test]
    fn half_truncates_integers() {
        assert_eq!(7_i64.half(), 3);
        assert_eq!(7.0_f64.half(), 3.5);
    }

    #[test]
    fn partial_min_max_prefer_first_on_ties_and_nan() {
        assert_eq!(partial_min(1.0, 2.0), 1.0);
        assert_eq!(partial_max(1.0, 2.0), 2.0);
        assert!(partial_min(f64::NAN, 2.0).is_nan());
        assert!(partial_max(f64::NAN, 2.0).is_nan());
        assert_eq!(partial_max(3, 3), 3);
    }
}
