use crate::error::IntervalSetError;
use crate::interval::Interval;
use crate::scalar::Scalar;

/// Checks that `intervals` is in canonical form: no empty components, sorted
/// ascending, pairwise disjoint and pairwise non-adjacent.
///
/// Reports the first offending position.
pub fn check_canonical<T: Scalar>(intervals: &[Interval<T>]) -> Result<(), IntervalSetError> {
    if let Some(index) = intervals.iter().position(Interval::is_empty) {
        return Err(IntervalSetError::EmptyComponent { index });
    }

    for (k, w) in intervals.windows(2).enumerate() {
        let index = k + 1;
        let (prev, curr) = (&w[0], &w[1]);
        if prev.overlaps(curr) {
            return Err(IntervalSetError::Overlapping { index });
        }
        if !prev.precedes(curr) {
            return Err(IntervalSetError::OutOfOrder { index });
        }
        if prev.adjacent_to(curr) {
            return Err(IntervalSetError::Adjacent { index });
        }
    }
    Ok(())
}

/// Returns true if `intervals` passes [`check_canonical`].
pub fn is_canonical<T: Scalar>(intervals: &[Interval<T>]) -> bool {
    check_canonical(intervals).is_ok()
}
