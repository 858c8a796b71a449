//! Physical quantities as interval boundaries.
//!
//! `qtty::Quantity<U>` implements [`Scalar`], [`Infinite`] and [`Numeric`], so
//! intervals and sets can be expressed directly in seconds, days or metres
//! and converted between units of the same dimension.

use qtty::{Quantity, Unit};

use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::scalar::{Infinite, Numeric, Scalar};

/// Marker trait for units that share the same physical dimension.
///
/// This trait is automatically implemented for any pair of units where
/// `From::Dim == To::Dim`, so conversions between unrelated dimensions are
/// rejected at compile time.
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity from one unit to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

impl<U: Unit> Scalar for Quantity<U> {
    #[inline]
    fn is_infinite(&self) -> bool {
        self.value().is_infinite()
    }
}

impl<U: Unit> Infinite for Quantity<U> {
    #[inline]
    fn infinity() -> Self {
        Quantity::new(f64::INFINITY)
    }

    #[inline]
    fn neg_infinity() -> Self {
        Quantity::new(f64::NEG_INFINITY)
    }
}

impl<U: Unit> Numeric for Quantity<U> {
    #[inline]
    fn zero() -> Self {
        Quantity::new(0.0)
    }

    #[inline]
    fn half(self) -> Self {
        Quantity::new(self.value() / 2.0)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.value()
    }
}

impl<U: Unit> Interval<Quantity<U>> {
    /// Converts this interval to another unit of the same dimension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qtty::{Day, Quantity, Second};
    /// use disjoint_intervals::Interval;
    ///
    /// let interval_sec = Interval::closed(
    ///     Quantity::<Second>::new(0.0),
    ///     Quantity::<Second>::new(86400.0),
    /// );
    /// let interval_day: Interval<Quantity<Day>> = interval_sec.to();
    /// assert!((interval_day.upper_bound().unwrap().value() - 1.0).abs() < 1e-12);
    /// ```
    pub fn to<V: Unit>(self) -> Interval<Quantity<V>>
    where
        U: SameDim<V>,
    {
        self.map(convert::<U, V>)
    }
}

impl<U: Unit> IntervalSet<Quantity<U>> {
    /// Converts every component to another unit of the same dimension.
    ///
    /// The result is re-normalized: rounding during conversion can make
    /// neighbouring components touch.
    pub fn to<V: Unit>(&self) -> IntervalSet<Quantity<V>>
    where
        U: SameDim<V>,
    {
        self.map(|iv| iv.to::<V>())
    }
}
