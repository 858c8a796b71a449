//! A canonical container for disjoint, sorted intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval<T>>` and guarantees the **canonical
//! invariant** at all times: components are non-empty, sorted, pairwise
//! disjoint and pairwise non-adjacent (touching components are merged).
//!
//! Read access is transparent via `Deref<Target = [Interval<T>]>`. There is
//! no mutable view; every structural change rebuilds the component sequence
//! through normalization.

mod builder;

use std::fmt::{self, Display};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Deref, Index, Not, Sub, SubAssign,
};

use crate::error::IntervalSetError;
use crate::interval::Interval;
use crate::operations::{
    check_canonical, compute_complement, compute_intersection, compute_union, is_canonical,
    normalize,
};
use crate::scalar::{Discrete, Infinite, Numeric, Scalar};

pub use builder::IntervalSetBuilder;

/// A sorted set of disjoint intervals, closed under union, intersection,
/// complement and difference.
///
/// # Transparent read access
///
/// `IntervalSet<T>` implements `Deref<Target = [Interval<T>]>`, so all
/// immutable slice methods (`.len()`, `.iter()`, indexing, `.first()`,
/// `.last()`, `.windows()`, etc.) are available directly.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) merge.
/// - `union`, `intersection`, `complement`: O(n + m) merge walks.
/// - `contains`, `contains_interval`: O(log n) binary search.
/// - `insert`: O(1) amortized when appending in order, O(n) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T>(Vec<Interval<T>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T> IntervalSet<T> {
    /// Creates an empty interval set.
    pub const fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T: Scalar> IntervalSet<T> {
    /// Normalizes an arbitrary collection of intervals: unsorted input,
    /// duplicates, overlaps and empties are all accepted.
    pub fn from_components<I: IntoIterator<Item = Interval<T>>>(intervals: I) -> Self {
        Self(normalize(intervals.into_iter().collect()))
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// In debug builds this asserts the invariant; in release builds the check
    /// is elided. Use [`try_from_sorted`](Self::try_from_sorted) for input that
    /// is not trusted.
    pub fn from_sorted_unchecked(vec: Vec<Interval<T>>) -> Self {
        debug_assert!(
            is_canonical(&vec),
            "IntervalSet::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    /// Wraps a `Vec` after verifying it is in canonical form.
    pub fn try_from_sorted(vec: Vec<Interval<T>>) -> Result<Self, IntervalSetError> {
        if let Err(err) = check_canonical(&vec) {
            log::debug!("rejected non-canonical component sequence: {err}");
            return Err(err);
        }
        Ok(Self(vec))
    }

    /// The set `{value}`.
    pub fn point(value: T) -> Self {
        Self::from(Interval::singleton(value))
    }

    /// Starts a fluent builder that normalizes once, on `build`.
    pub fn builder() -> IntervalSetBuilder<T> {
        IntervalSetBuilder::new()
    }
}

impl<T: Infinite> IntervalSet<T> {
    /// The whole domain, `(-inf, +inf)`.
    pub fn unbounded() -> Self {
        Self::from(Interval::unbounded())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> IntervalSet<T> {
    /// Number of maximal disjoint components.
    pub fn component_count(&self) -> usize {
        self.0.len()
    }

    /// Returns true if `value` lies in one of the components.
    ///
    /// Binary-searches for the first component that does not end before
    /// `value`; disjointness leaves it as the only candidate.
    pub fn contains(&self, value: T) -> bool {
        let probe = Interval::singleton(value);
        let idx = self.0.partition_point(|iv| iv.precedes(&probe));
        self.0.get(idx).is_some_and(|iv| iv.contains(value))
    }

    /// Returns true if the whole of `interval` lies inside a single component.
    ///
    /// The empty interval is always contained. An interval that spans a gap
    /// is not, even if both of its ends are.
    pub fn contains_interval(&self, interval: &Interval<T>) -> bool {
        if interval.is_empty() {
            return true;
        }
        let idx = self.0.partition_point(|iv| iv.precedes(interval));
        self.0.get(idx).is_some_and(|iv| interval.subset_of(iv))
    }

    /// Smallest interval covering every component, with the closedness of the
    /// outermost ends. Empty for the empty set.
    pub fn span(&self) -> Interval<T> {
        let (Some(first), Some(last)) = (self.0.first(), self.0.last()) else {
            return Interval::empty();
        };
        match (first.lower_bound(), last.upper_bound()) {
            (Some(lower), Some(upper)) => Interval::new(
                lower,
                upper,
                first.is_left_closed(),
                last.is_right_closed(),
            ),
            _ => Interval::empty(),
        }
    }

    /// The intervals strictly between consecutive components.
    ///
    /// A set of `n` components has `n - 1` gaps; each gap end is open exactly
    /// where the neighbouring component is closed.
    pub fn gaps(&self) -> IntervalSet<T> {
        Self(compute_complement(&self.0, self.span()))
    }

    /// Returns the components as a slice.
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T: Numeric> IntervalSet<T> {
    /// Sum of component lengths.
    pub fn measure(&self) -> T {
        self.0
            .iter()
            .fold(T::zero(), |total, iv| total + iv.length())
    }

    /// Total length of the gaps between components.
    pub fn gap_measure(&self) -> T {
        self.gaps().measure()
    }

    /// Fraction of the span covered by components, in `[0, 1]`.
    ///
    /// Zero for the empty set and for a span of zero length (a single point).
    pub fn density(&self) -> f64 {
        let span = self.span();
        if span.is_empty() {
            return 0.0;
        }
        let span_length = span.length().to_f64();
        if span_length == 0.0 {
            return 0.0;
        }
        self.measure().to_f64() / span_length
    }
}

// ─────────────────────────────────────────────────────────────────────
// Relations
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> IntervalSet<T> {
    /// Returns true if every point of `self` is in `other`.
    ///
    /// Walks both sequences once: for each component of `self` the cursor on
    /// `other` skips components ending before it, and the first remaining
    /// one must contain it entirely.
    pub fn subset_of(&self, other: &IntervalSet<T>) -> bool {
        let mut j = 0usize;
        for iv in &self.0 {
            while j < other.0.len() && other.0[j].precedes(iv) {
                j += 1;
            }
            match other.0.get(j) {
                Some(candidate) if iv.subset_of(candidate) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn superset_of(&self, other: &IntervalSet<T>) -> bool {
        other.subset_of(self)
    }

    pub fn disjoint_from(&self, other: &IntervalSet<T>) -> bool {
        self.intersection(other).is_empty()
    }

    pub fn overlaps(&self, other: &IntervalSet<T>) -> bool {
        !self.disjoint_from(other)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> IntervalSet<T> {
    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        Self(compute_union(&self.0, &other.0))
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersection(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        Self(compute_intersection(&self.0, &other.0))
    }

    /// Returns the complement of `self` within `bounds`.
    ///
    /// Available for every scalar type, including those without infinity.
    pub fn complement_within(&self, bounds: Interval<T>) -> IntervalSet<T> {
        Self(compute_complement(&self.0, bounds))
    }
}

impl<T: Infinite> IntervalSet<T> {
    /// Returns the complement of `self` over the whole domain.
    ///
    /// `complement(complement(a)) == a` for every set.
    pub fn complement(&self) -> IntervalSet<T> {
        self.complement_within(Interval::unbounded())
    }

    /// Returns the points of `self` that are not in `other`.
    pub fn difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        self.intersection(&other.complement())
    }

    /// Returns the points in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        self.union(other).difference(&self.intersection(other))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Functional helpers
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> IntervalSet<T> {
    /// Keeps the components matching `predicate`.
    ///
    /// Dropping components cannot create overlaps or adjacency, so the result
    /// is not re-normalized.
    pub fn filter<F: FnMut(&Interval<T>) -> bool>(&self, mut predicate: F) -> IntervalSet<T> {
        Self(
            self.0
                .iter()
                .filter(|iv| predicate(iv))
                .copied()
                .collect(),
        )
    }

    /// Transforms every component and re-normalizes, since the new bounds may
    /// overlap or touch.
    pub fn map<S: Scalar, F: FnMut(&Interval<T>) -> Interval<S>>(
        &self,
        transform: F,
    ) -> IntervalSet<S> {
        IntervalSet::from_components(self.0.iter().map(transform))
    }

    /// Visits the components in ascending order.
    pub fn for_each<F: FnMut(&Interval<T>)>(&self, action: F) {
        self.0.iter().for_each(action);
    }
}

impl<T: Discrete> IntervalSet<T> {
    /// Rewrites every component in closed form and merges components whose
    /// closed forms are consecutive, e.g. `[0, 10] ∪ [11, 20]` over integers
    /// becomes `[0, 20]`.
    pub fn coalesce_discrete(&self) -> IntervalSet<T> {
        let mut result: Vec<Interval<T>> = Vec::with_capacity(self.0.len());
        for iv in self.0.iter().map(Interval::to_closed) {
            if iv.is_empty() {
                continue;
            }
            if let Some(last) = result.last_mut() {
                if last.adjacent_discrete_to(&iv) {
                    if let (Some(lower), Some(upper)) = (last.lower_bound(), iv.upper_bound()) {
                        *last = Interval::closed(lower, upper);
                        continue;
                    }
                }
            }
            result.push(iv);
        }
        Self::from_sorted_unchecked(result)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> IntervalSet<T> {
    /// Inserts an interval, maintaining canonical form.
    ///
    /// Appending past the last component is O(1); anything else is an O(n)
    /// merge with the existing components.
    pub fn insert(&mut self, interval: Interval<T>) {
        if interval.is_empty() {
            return;
        }
        // Fast path: strictly after the last component, with a gap.
        if let Some(last) = self.0.last() {
            if last.precedes(&interval) && !last.adjacent_to(&interval) {
                self.0.push(interval);
                return;
            }
        }
        self.0 = compute_union(&self.0, &[interval]);
    }

    /// Removes every point of `interval` from the set.
    pub fn remove(&mut self, interval: Interval<T>) {
        if interval.is_empty() || self.0.is_empty() {
            return;
        }
        let mut kept = Vec::with_capacity(self.0.len() + 1);
        for iv in &self.0 {
            if iv.overlaps(&interval) {
                kept.extend(compute_complement(&[interval], *iv));
            } else {
                kept.push(*iv);
            }
        }
        self.0 = kept;
    }

    /// Removes all components.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Retains only the components for which the predicate returns `true`.
    ///
    /// Because removal cannot violate sorted-ness or create new overlaps,
    /// the canonical invariant is preserved without re-normalization.
    pub fn retain<F: FnMut(&Interval<T>) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<T>> {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl<T> Deref for IntervalSet<T> {
    type Target = [Interval<T>];

    fn deref(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T> AsRef<[Interval<T>]> for IntervalSet<T> {
    fn as_ref(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T> Index<usize> for IntervalSet<T> {
    type Output = Interval<T>;

    fn index(&self, index: usize) -> &Interval<T> {
        &self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> From<Vec<Interval<T>>> for IntervalSet<T> {
    /// Creates an `IntervalSet` from an unsorted `Vec`, normalizing on construction.
    fn from(vec: Vec<Interval<T>>) -> Self {
        Self(normalize(vec))
    }
}

impl<T: Scalar> From<Interval<T>> for IntervalSet<T> {
    /// Creates a single-component set, or the empty set for an empty interval.
    fn from(interval: Interval<T>) -> Self {
        if interval.is_empty() {
            Self::new()
        } else {
            Self(vec![interval])
        }
    }
}

impl<T: Scalar> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_components(iter)
    }
}

impl<T: Scalar> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        let mut pending = std::mem::take(&mut self.0);
        pending.extend(iter);
        self.0 = normalize(pending);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────

impl<T: Scalar> BitOr for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitor(self, rhs: Self) -> IntervalSet<T> {
        self.union(rhs)
    }
}

impl<T: Scalar> BitAnd for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitand(self, rhs: Self) -> IntervalSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Infinite> Sub for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn sub(self, rhs: Self) -> IntervalSet<T> {
        self.difference(rhs)
    }
}

impl<T: Infinite> BitXor for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitxor(self, rhs: Self) -> IntervalSet<T> {
        self.symmetric_difference(rhs)
    }
}

impl<T: Infinite> Not for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn not(self) -> IntervalSet<T> {
        self.complement()
    }
}

impl<T: Scalar> BitOrAssign<&IntervalSet<T>> for IntervalSet<T> {
    fn bitor_assign(&mut self, rhs: &IntervalSet<T>) {
        *self = self.union(rhs);
    }
}

impl<T: Scalar> BitAndAssign<&IntervalSet<T>> for IntervalSet<T> {
    fn bitand_assign(&mut self, rhs: &IntervalSet<T>) {
        *self = self.intersection(rhs);
    }
}

impl<T: Infinite> SubAssign<&IntervalSet<T>> for IntervalSet<T> {
    fn sub_assign(&mut self, rhs: &IntervalSet<T>) {
        *self = self.difference(rhs);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl<T: Scalar> PartialEq<Vec<Interval<T>>> for IntervalSet<T> {
    fn eq(&self, other: &Vec<Interval<T>>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], interval_set)` in tests.
impl<T: Scalar> PartialEq<IntervalSet<T>> for Vec<Interval<T>> {
    fn eq(&self, other: &IntervalSet<T>) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize> serde::Serialize for IntervalSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>> serde::Deserialize<'de> for IntervalSet<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}
