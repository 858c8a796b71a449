use super::IntervalSet;
use crate::interval::Interval;
use crate::scalar::Scalar;

/// Accumulates raw intervals and normalizes them once, in [`build`].
///
/// ```rust
/// use disjoint_intervals::IntervalSet;
///
/// let set = IntervalSet::builder()
///     .add_closed(0.0, 10.0)
///     .add_right_open(10.0, 20.0)
///     .add_point(30.0)
///     .build();
/// assert_eq!(set.len(), 2);
/// ```
///
/// [`build`]: IntervalSetBuilder::build
#[derive(Debug, Clone)]
pub struct IntervalSetBuilder<T> {
    pending: Vec<Interval<T>>,
}

impl<T> IntervalSetBuilder<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T: Scalar> IntervalSetBuilder<T> {
    pub fn add(mut self, interval: Interval<T>) -> Self {
        self.pending.push(interval);
        self
    }

    pub fn add_closed(self, lower: T, upper: T) -> Self {
        self.add(Interval::closed(lower, upper))
    }

    pub fn add_open(self, lower: T, upper: T) -> Self {
        self.add(Interval::open(lower, upper))
    }

    pub fn add_left_open(self, lower: T, upper: T) -> Self {
        self.add(Interval::left_open(lower, upper))
    }

    pub fn add_right_open(self, lower: T, upper: T) -> Self {
        self.add(Interval::right_open(lower, upper))
    }

    pub fn add_point(self, value: T) -> Self {
        self.add(Interval::singleton(value))
    }

    /// Adds every component of an existing set.
    pub fn add_set(mut self, set: &IntervalSet<T>) -> Self {
        self.pending.extend_from_slice(set);
        self
    }

    pub fn build(self) -> IntervalSet<T> {
        IntervalSet::from(self.pending)
    }
}

impl<T> Default for IntervalSetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Extend<Interval<T>> for IntervalSetBuilder<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
