//! Convex range over a scalar type with independent boundary closedness.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::BitAnd;

use crate::scalar::{partial_max, partial_min, Discrete, Infinite, Numeric, Scalar};

/// Stored bounds of a non-empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Endpoints<T> {
    lower: T,
    upper: T,
    left_closed: bool,
    right_closed: bool,
}

/// A (possibly empty, possibly unbounded) range `lower .. upper` whose ends
/// are independently open or closed.
///
/// Intervals are immutable values. Every constructor canonicalizes:
///
/// - crossed bounds, or a single point that is not closed on both sides,
///   produce the empty interval, and all empty intervals compare equal;
/// - an infinite bound is always open, so `closed(-inf, 5.0)` equals
///   `at_most(5.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    repr: Option<Endpoints<T>>,
}

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T> Interval<T> {
    /// The canonical empty interval.
    pub const fn empty() -> Self {
        Self { repr: None }
    }
}

impl<T: Scalar> Interval<T> {
    /// Creates an interval with explicit closedness on each side.
    ///
    /// Never fails: a combination that excludes every point yields
    /// [`Interval::empty`].
    pub fn new(lower: T, upper: T, left_closed: bool, right_closed: bool) -> Self {
        let left_closed = left_closed && !lower.is_infinite();
        let right_closed = right_closed && !upper.is_infinite();

        // `!(lower <= upper)` rather than `lower > upper` so NaN bounds are empty.
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        let crossed = !(lower <= upper);
        if crossed || (lower == upper && !(left_closed && right_closed)) {
            return Self::empty();
        }

        Self {
            repr: Some(Endpoints {
                lower,
                upper,
                left_closed,
                right_closed,
            }),
        }
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, true)
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, false, false)
    }

    /// `(lower, upper]`
    pub fn left_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, false, true)
    }

    /// `[lower, upper)`
    pub fn right_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, false)
    }

    /// `[value, value]`
    pub fn singleton(value: T) -> Self {
        Self::closed(value, value)
    }
}

impl<T: Infinite> Interval<T> {
    /// `(-inf, +inf)`
    pub fn unbounded() -> Self {
        Self::open(T::neg_infinity(), T::infinity())
    }

    /// `[lower, +inf)`
    pub fn at_least(lower: T) -> Self {
        Self::right_open(lower, T::infinity())
    }

    /// `(-inf, upper]`
    pub fn at_most(upper: T) -> Self {
        Self::left_open(T::neg_infinity(), upper)
    }

    /// `(lower, +inf)`
    pub fn greater_than(lower: T) -> Self {
        Self::open(lower, T::infinity())
    }

    /// `(-inf, upper)`
    pub fn less_than(upper: T) -> Self {
        Self::open(T::neg_infinity(), upper)
    }
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> Interval<T> {
    pub fn is_empty(&self) -> bool {
        self.repr.is_none()
    }

    /// Returns true if `value` lies inside the interval, respecting closedness.
    ///
    /// Incomparable values (NaN) are never contained.
    pub fn contains(&self, value: T) -> bool {
        let Some(e) = self.repr else {
            return false;
        };
        let left_ok = if e.left_closed {
            value >= e.lower
        } else {
            value > e.lower
        };
        let right_ok = if e.right_closed {
            value <= e.upper
        } else {
            value < e.upper
        };
        left_ok && right_ok
    }

    /// Returns true for a closed single-point interval.
    pub fn is_point(&self) -> bool {
        matches!(self.repr, Some(e) if e.lower == e.upper)
    }

    /// Returns true if the interval is non-empty and neither bound is infinite.
    pub fn is_bounded(&self) -> bool {
        matches!(self.repr, Some(e) if !e.lower.is_infinite() && !e.upper.is_infinite())
    }

    pub fn lower_bound(&self) -> Option<T> {
        self.repr.map(|e| e.lower)
    }

    pub fn upper_bound(&self) -> Option<T> {
        self.repr.map(|e| e.upper)
    }

    pub fn is_left_closed(&self) -> bool {
        matches!(self.repr, Some(e) if e.left_closed)
    }

    pub fn is_right_closed(&self) -> bool {
        matches!(self.repr, Some(e) if e.right_closed)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Relations
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> Interval<T> {
    /// Returns true if every point of `self` lies in `other`.
    ///
    /// The empty interval is a subset of everything; nothing non-empty is a
    /// subset of the empty interval.
    pub fn subset_of(&self, other: &Interval<T>) -> bool {
        let Some(a) = self.repr else {
            return true;
        };
        let Some(b) = other.repr else {
            return false;
        };

        let left_ok = b.lower < a.lower || (b.lower == a.lower && (b.left_closed || !a.left_closed));
        let right_ok =
            b.upper > a.upper || (b.upper == a.upper && (b.right_closed || !a.right_closed));
        left_ok && right_ok
    }

    pub fn superset_of(&self, other: &Interval<T>) -> bool {
        other.subset_of(self)
    }

    /// Returns true if the two intervals share at least one point.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        let (Some(a), Some(b)) = (self.repr, other.repr) else {
            return false;
        };

        if a.upper < b.lower || a.lower > b.upper {
            return false;
        }
        if a.upper == b.lower {
            return a.right_closed && b.left_closed;
        }
        if a.lower == b.upper {
            return a.left_closed && b.right_closed;
        }
        true
    }

    pub fn disjoint_from(&self, other: &Interval<T>) -> bool {
        !self.overlaps(other)
    }

    /// Returns true if the two intervals touch at one boundary value that
    /// exactly one of them includes, so together they form one interval with
    /// neither gap nor overlap.
    pub fn adjacent_to(&self, other: &Interval<T>) -> bool {
        let (Some(a), Some(b)) = (self.repr, other.repr) else {
            return false;
        };

        if a.upper == b.lower {
            return a.right_closed != b.left_closed;
        }
        if a.lower == b.upper {
            return a.left_closed != b.right_closed;
        }
        false
    }

    /// Returns true if both are non-empty and all of `self` lies strictly to
    /// the left of `other`.
    pub fn precedes(&self, other: &Interval<T>) -> bool {
        let (Some(a), Some(b)) = (self.repr, other.repr) else {
            return false;
        };
        a.upper < b.lower || (a.upper == b.lower && !(a.right_closed && b.left_closed))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Pairwise algebra
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> Interval<T> {
    /// Returns the points common to both intervals.
    ///
    /// At a shared bound value the result keeps the point only if both
    /// operands do.
    pub fn intersect(&self, other: &Interval<T>) -> Interval<T> {
        let (Some(a), Some(b)) = (self.repr, other.repr) else {
            return Self::empty();
        };

        let lower = partial_max(a.lower, b.lower);
        let upper = partial_min(a.upper, b.upper);

        let left_closed = if a.lower == b.lower {
            a.left_closed && b.left_closed
        } else if lower == a.lower {
            a.left_closed
        } else {
            b.left_closed
        };
        let right_closed = if a.upper == b.upper {
            a.right_closed && b.right_closed
        } else if upper == a.upper {
            a.right_closed
        } else {
            b.right_closed
        };

        Self::new(lower, upper, left_closed, right_closed)
    }

    /// Returns the smallest interval covering both operands, or `None` when
    /// their union is not itself an interval.
    ///
    /// At a shared bound value the result keeps the point if either operand
    /// does.
    pub fn hull(&self, other: &Interval<T>) -> Option<Interval<T>> {
        let Some(a) = self.repr else {
            return Some(*other);
        };
        let Some(b) = other.repr else {
            return Some(*self);
        };
        if !self.overlaps(other) && !self.adjacent_to(other) {
            return None;
        }

        let lower = partial_min(a.lower, b.lower);
        let upper = partial_max(a.upper, b.upper);

        let left_closed = if a.lower == b.lower {
            a.left_closed || b.left_closed
        } else if lower == a.lower {
            a.left_closed
        } else {
            b.left_closed
        };
        let right_closed = if a.upper == b.upper {
            a.right_closed || b.right_closed
        } else if upper == a.upper {
            a.right_closed
        } else {
            b.right_closed
        };

        Some(Self::new(lower, upper, left_closed, right_closed))
    }

    /// Applies `f` to both bounds, keeping closedness.
    ///
    /// The result is re-canonicalized, so a decreasing `f` yields the empty
    /// interval.
    pub fn map<S: Scalar, F: FnMut(T) -> S>(&self, mut f: F) -> Interval<S> {
        match self.repr {
            None => Interval::empty(),
            Some(e) => Interval::new(f(e.lower), f(e.upper), e.left_closed, e.right_closed),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Measures
// ─────────────────────────────────────────────────────────────────────

impl<T: Numeric> Interval<T> {
    /// `upper - lower`, or zero when empty.
    pub fn length(&self) -> T {
        match self.repr {
            None => T::zero(),
            Some(e) => e.upper - e.lower,
        }
    }

    /// `lower + length / 2`, or zero when empty.
    pub fn midpoint(&self) -> T {
        match self.repr {
            None => T::zero(),
            Some(e) => e.lower + self.length().half(),
        }
    }

    /// Size of the gap between the two intervals; zero if either is empty or
    /// they overlap.
    pub fn distance_to(&self, other: &Interval<T>) -> T {
        let (Some(a), Some(b)) = (self.repr, other.repr) else {
            return T::zero();
        };
        if self.overlaps(other) {
            return T::zero();
        }
        if a.upper <= b.lower {
            b.lower - a.upper
        } else {
            a.lower - b.upper
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Discrete domains
// ─────────────────────────────────────────────────────────────────────

impl<T: Discrete> Interval<T> {
    /// Rewrites open ends as closed ones over the discrete domain, e.g.
    /// `(1, 5)` over integers becomes `[2, 4]`.
    pub fn to_closed(&self) -> Interval<T> {
        let Some(e) = self.repr else {
            return Self::empty();
        };
        let lower = if e.left_closed {
            Some(e.lower)
        } else {
            e.lower.successor()
        };
        let upper = if e.right_closed {
            Some(e.upper)
        } else {
            e.upper.predecessor()
        };
        match (lower, upper) {
            (Some(lower), Some(upper)) => Self::closed(lower, upper),
            _ => Self::empty(),
        }
    }

    /// Like [`adjacent_to`](Self::adjacent_to), but also accepts intervals
    /// whose closed forms are consecutive: `[0, 10]` and `[11, 20]`.
    pub fn adjacent_discrete_to(&self, other: &Interval<T>) -> bool {
        if self.adjacent_to(other) {
            return true;
        }
        let (a, b) = (self.to_closed(), other.to_closed());
        let (Some(a), Some(b)) = (a.repr, b.repr) else {
            return false;
        };
        a.upper.successor() == Some(b.lower) || b.upper.successor() == Some(a.lower)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────

/// Sort key: lower bound, then closed-before-open on the left, then upper
/// bound, then closed-before-open on the right. The empty interval sorts
/// first.
impl<T: Scalar> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = match (self.repr, other.repr) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
            (Some(a), Some(b)) => (a, b),
        };

        match a.lower.partial_cmp(&b.lower)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        if a.left_closed != b.left_closed {
            return Some(if a.left_closed {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        match a.upper.partial_cmp(&b.upper)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        if a.right_closed != b.right_closed {
            return Some(if a.right_closed {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        Some(Ordering::Equal)
    }
}

/// Orders two intervals by where they end: earlier upper bound first, and at
/// equal bounds the open end before the closed one.
pub(crate) fn cmp_upper<T: Scalar>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    match (a.repr, b.repr) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a
            .upper
            .partial_cmp(&b.upper)
            .unwrap_or(Ordering::Equal)
            .then(a.right_closed.cmp(&b.right_closed)),
    }
}

impl<T: Scalar> BitAnd for Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Interval<T>) -> Interval<T> {
        self.intersect(&rhs)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            None => write!(f, "∅"),
            Some(e) => write!(
                f,
                "{}{}, {}{}",
                if e.left_closed { '[' } else { '(' },
                e.lower,
                e.upper,
                if e.right_closed { ']' } else { ')' },
            ),
        }
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawInterval<T> {
    lower: Option<T>,
    upper: Option<T>,
    left_closed: bool,
    right_closed: bool,
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize> serde::Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let raw = RawInterval {
            lower: self.lower_bound(),
            upper: self.upper_bound(),
            left_closed: self.is_left_closed(),
            right_closed: self.is_right_closed(),
        };
        serde::Serialize::serialize(&raw, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>> serde::Deserialize<'de> for Interval<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <RawInterval<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match (raw.lower, raw.upper) {
            (Some(lower), Some(upper)) => {
                Self::new(lower, upper, raw.left_closed, raw.right_closed)
            }
            _ => Self::empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Iv = Interval<f64>;

    #[test]
    fn test_factories() {
        let c = Iv::closed(0.0, 10.0);
        assert_eq!(c.lower_bound(), Some(0.0));
        assert_eq!(c.upper_bound(), Some(10.0));
        assert!(c.is_left_closed() && c.is_right_closed());

        let o = Iv::open(0.0, 10.0);
        assert!(!o.is_left_closed() && !o.is_right_closed());

        assert!(!Iv::left_open(0.0, 1.0).is_left_closed());
        assert!(Iv::left_open(0.0, 1.0).is_right_closed());
        assert!(Iv::right_open(0.0, 1.0).is_left_closed());
        assert!(!Iv::right_open(0.0, 1.0).is_right_closed());

        assert_eq!(Iv::singleton(3.0), Iv::closed(3.0, 3.0));
        assert!(Iv::singleton(3.0).is_point());
    }

    #[test]
    fn test_degenerate_bounds_are_empty() {
        assert!(Iv::closed(5.0, 1.0).is_empty());
        assert!(Iv::open(2.0, 2.0).is_empty());
        assert!(Iv::left_open(2.0, 2.0).is_empty());
        assert!(Iv::right_open(2.0, 2.0).is_empty());
        assert!(!Iv::closed(2.0, 2.0).is_empty());
        assert!(Iv::closed(f64::NAN, 1.0).is_empty());
        assert!(Iv::closed(0.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_all_empties_are_equal() {
        assert_eq!(Iv::closed(5.0, 1.0), Iv::open(3.0, 3.0));
        assert_eq!(Iv::closed(5.0, 1.0), Iv::empty());
        assert_eq!(Iv::default(), Iv::empty());
        assert_eq!(Iv::empty().lower_bound(), None);
        assert_eq!(Iv::empty().upper_bound(), None);
        assert!(!Iv::empty().is_left_closed());
    }

    #[test]
    fn test_contains_respects_closedness() {
        let c = Iv::closed(0.0, 10.0);
        assert!(c.contains(0.0));
        assert!(c.contains(10.0));
        assert!(c.contains(5.0));
        assert!(!c.contains(10.5));

        let o = Iv::open(0.0, 10.0);
        assert!(!o.contains(0.0));
        assert!(!o.contains(10.0));
        assert!(o.contains(0.001));

        assert!(!Iv::empty().contains(0.0));
        assert!(!c.contains(f64::NAN));
    }

    #[test]
    fn test_unbounded_factories() {
        let all = Iv::unbounded();
        assert!(all.contains(0.0));
        assert!(all.contains(-1e300));
        assert!(!all.contains(f64::INFINITY));
        assert!(!all.contains(f64::NEG_INFINITY));
        assert!(!all.is_bounded());

        assert!(Iv::at_least(5.0).contains(5.0));
        assert!(!Iv::greater_than(5.0).contains(5.0));
        assert!(Iv::at_most(5.0).contains(5.0));
        assert!(!Iv::less_than(5.0).contains(5.0));
        assert!(Iv::at_least(5.0).contains(1e12));
        assert!(!Iv::at_least(5.0).contains(f64::INFINITY));
    }

    #[test]
    fn test_infinite_bounds_are_forced_open() {
        assert_eq!(Iv::closed(f64::NEG_INFINITY, 5.0), Iv::at_most(5.0));
        assert_eq!(Iv::closed(5.0, f64::INFINITY), Iv::at_least(5.0));
        assert!(Iv::closed(f64::INFINITY, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_is_bounded() {
        assert!(Iv::closed(0.0, 1.0).is_bounded());
        assert!(!Iv::at_least(0.0).is_bounded());
        assert!(!Iv::empty().is_bounded());
        assert!(Interval::closed(i32::MIN, i32::MAX).is_bounded());
    }

    #[test]
    fn test_subset_of() {
        let outer = Iv::closed(0.0, 10.0);
        assert!(Iv::closed(2.0, 8.0).subset_of(&outer));
        assert!(Iv::open(0.0, 10.0).subset_of(&outer));
        assert!(!outer.subset_of(&Iv::open(0.0, 10.0)));
        assert!(outer.subset_of(&outer));
        assert!(Iv::empty().subset_of(&outer));
        assert!(Iv::empty().subset_of(&Iv::empty()));
        assert!(!outer.subset_of(&Iv::empty()));
        assert!(outer.superset_of(&Iv::singleton(10.0)));
    }

    #[test]
    fn test_overlaps_at_touching_points() {
        let a = Iv::closed(0.0, 5.0);
        assert!(a.overlaps(&Iv::closed(5.0, 10.0)));
        assert!(!a.overlaps(&Iv::left_open(5.0, 10.0)));
        assert!(!Iv::right_open(0.0, 5.0).overlaps(&Iv::closed(5.0, 10.0)));
        assert!(Iv::closed(5.0, 10.0).overlaps(&a));
        assert!(!Iv::left_open(5.0, 10.0).overlaps(&a));
        assert!(a.overlaps(&Iv::closed(2.0, 3.0)));
        assert!(!a.overlaps(&Iv::empty()));
        assert!(a.disjoint_from(&Iv::closed(6.0, 7.0)));
    }

    #[test]
    fn test_adjacent_to() {
        let a = Iv::closed(0.0, 5.0);
        assert!(a.adjacent_to(&Iv::left_open(5.0, 10.0)));
        assert!(Iv::left_open(5.0, 10.0).adjacent_to(&a));
        assert!(!a.adjacent_to(&Iv::closed(5.0, 10.0)));
        assert!(!Iv::right_open(0.0, 5.0).adjacent_to(&Iv::open(5.0, 10.0)));
        assert!(!a.adjacent_to(&Iv::closed(6.0, 10.0)));
        assert!(Iv::singleton(5.0).adjacent_to(&Iv::open(5.0, 6.0)));
        assert!(!a.adjacent_to(&Iv::empty()));
    }

    #[test]
    fn test_precedes() {
        assert!(Iv::closed(0.0, 1.0).precedes(&Iv::closed(2.0, 3.0)));
        assert!(Iv::right_open(0.0, 2.0).precedes(&Iv::closed(2.0, 3.0)));
        assert!(!Iv::closed(0.0, 2.0).precedes(&Iv::closed(2.0, 3.0)));
        assert!(!Iv::closed(2.0, 3.0).precedes(&Iv::closed(0.0, 1.0)));
        assert!(!Iv::empty().precedes(&Iv::closed(0.0, 1.0)));
    }

    #[test]
    fn test_intersect() {
        let a = Iv::closed(0.0, 10.0);
        assert_eq!(a.intersect(&Iv::closed(5.0, 15.0)), Iv::closed(5.0, 10.0));
        assert_eq!(a.intersect(&Iv::open(5.0, 15.0)), Iv::left_open(5.0, 10.0));
        assert!(a.intersect(&Iv::closed(11.0, 15.0)).is_empty());
        assert!(a.intersect(&Iv::empty()).is_empty());
        assert!(Iv::empty().intersect(&a).is_empty());
        assert_eq!(a & Iv::closed(-5.0, 3.0), Iv::closed(0.0, 3.0));
    }

    #[test]
    fn test_intersect_ands_closedness_at_shared_bounds() {
        let a = Iv::closed(0.0, 10.0);
        let b = Iv::open(0.0, 10.0);
        assert_eq!(a.intersect(&b), Iv::open(0.0, 10.0));
        assert_eq!(
            Iv::right_open(0.0, 10.0).intersect(&Iv::left_open(0.0, 10.0)),
            Iv::open(0.0, 10.0)
        );
    }

    #[test]
    fn test_intersect_collapsing_to_open_point_is_empty() {
        assert_eq!(
            Iv::closed(0.0, 5.0).intersect(&Iv::closed(5.0, 9.0)),
            Iv::singleton(5.0)
        );
        assert!(Iv::right_open(0.0, 5.0)
            .intersect(&Iv::closed(5.0, 9.0))
            .is_empty());
    }

    #[test]
    fn test_hull() {
        let a = Iv::closed(0.0, 5.0);
        assert_eq!(a.hull(&Iv::closed(3.0, 9.0)), Some(Iv::closed(0.0, 9.0)));
        assert_eq!(a.hull(&Iv::open(5.0, 9.0)), Some(Iv::right_open(0.0, 9.0)));
        assert_eq!(a.hull(&Iv::closed(6.0, 9.0)), None);
        assert_eq!(
            Iv::right_open(0.0, 5.0).hull(&Iv::left_open(5.0, 9.0)),
            None
        );
        assert_eq!(a.hull(&Iv::empty()), Some(a));
        assert_eq!(Iv::empty().hull(&a), Some(a));
    }

    #[test]
    fn test_hull_ors_closedness_at_shared_bounds() {
        assert_eq!(
            Iv::closed(0.0, 5.0).hull(&Iv::open(0.0, 5.0)),
            Some(Iv::closed(0.0, 5.0))
        );
        assert_eq!(
            Iv::right_open(0.0, 5.0).hull(&Iv::left_open(0.0, 5.0)),
            Some(Iv::closed(0.0, 5.0))
        );
    }

    #[test]
    fn test_measures() {
        let a = Iv::closed(2.0, 10.0);
        assert_eq!(a.length(), 8.0);
        assert_eq!(a.midpoint(), 6.0);
        assert_eq!(Iv::empty().length(), 0.0);
        assert_eq!(Iv::empty().midpoint(), 0.0);

        assert_eq!(a.distance_to(&Iv::closed(15.0, 20.0)), 5.0);
        assert_eq!(Iv::closed(15.0, 20.0).distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&Iv::closed(5.0, 20.0)), 0.0);
        assert_eq!(a.distance_to(&Iv::empty()), 0.0);
        assert_eq!(Iv::right_open(0.0, 5.0).distance_to(&Iv::closed(5.0, 7.0)), 0.0);
        assert_eq!(Iv::closed(5.0, 7.0).distance_to(&Iv::right_open(0.0, 5.0)), 0.0);

        assert_eq!(Interval::closed(1, 8).midpoint(), 4);
    }

    #[test]
    fn test_ordering() {
        let a = Iv::closed(0.0, 5.0);
        assert!(a < Iv::closed(1.0, 2.0));
        assert!(a < Iv::left_open(0.0, 1.0));
        assert!(a < Iv::closed(0.0, 6.0));
        assert!(a < Iv::right_open(0.0, 6.0));
        assert!(a < Iv::right_open(0.0, 5.0));
        assert!(Iv::empty() < a);
        assert_eq!(Iv::empty().partial_cmp(&Iv::empty()), Some(Ordering::Equal));
    }

    #[test]
    fn test_cmp_upper() {
        let a = Iv::right_open(0.0, 5.0);
        let b = Iv::closed(3.0, 5.0);
        assert_eq!(cmp_upper(&a, &b), Ordering::Less);
        assert_eq!(cmp_upper(&b, &a), Ordering::Greater);
        assert_eq!(cmp_upper(&b, &Iv::closed(4.0, 5.0)), Ordering::Equal);
    }

    #[test]
    fn test_map_and_integer_intervals() {
        let a = Interval::closed(1, 4);
        assert_eq!(a.map(|v| v * 10), Interval::closed(10, 40));
        assert!(a.map(|v| -v).is_empty());
        assert_eq!(a.map(|v| v as f64), Iv::closed(1.0, 4.0));
    }

    #[test]
    fn test_to_closed_over_integers() {
        assert_eq!(Interval::open(1, 5).to_closed(), Interval::closed(2, 4));
        assert_eq!(Interval::left_open(1, 5).to_closed(), Interval::closed(2, 5));
        assert!(Interval::open(3, 4).to_closed().is_empty());
        assert!(Interval::left_open(u8::MAX - 1, u8::MAX).to_closed().is_point());
        assert!(Interval::<i32>::empty().to_closed().is_empty());
    }

    #[test]
    fn test_adjacent_discrete_to() {
        let a = Interval::closed(0, 10);
        assert!(!a.adjacent_to(&Interval::closed(11, 20)));
        assert!(a.adjacent_discrete_to(&Interval::closed(11, 20)));
        assert!(Interval::closed(11, 20).adjacent_discrete_to(&a));
        assert!(a.adjacent_discrete_to(&Interval::open(10, 20)));
        assert!(!a.adjacent_discrete_to(&Interval::closed(12, 20)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Iv::closed(0.0, 1.5).to_string(), "[0, 1.5]");
        assert_eq!(Interval::open(0, 1).to_string(), "(0, 1)");
        assert_eq!(Interval::right_open(0, 1).to_string(), "[0, 1)");
        assert_eq!(Interval::left_open(0, 1).to_string(), "(0, 1]");
        assert_eq!(Interval::<i32>::empty().to_string(), "∅");
        assert_eq!(Iv::at_least(1.0).to_string(), "[1, inf)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let iv = Iv::left_open(1.0, 2.0);
        let json = serde_json::to_string(&iv).unwrap();
        let back: Iv = serde_json::from_str(&json).unwrap();
        assert_eq!(iv, back);

        let json = serde_json::to_string(&Iv::empty()).unwrap();
        assert!(json.contains("null"));
        let back: Iv = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
