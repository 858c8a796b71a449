use std::cmp::Ordering;

use crate::interval::Interval;
use crate::scalar::Scalar;

/// Appends `iv` to a sorted run, fusing it into the last component when the
/// two overlap or are adjacent.
///
/// `iv` must not sort before the last element of `result`.
pub(super) fn merge_into<T: Scalar>(result: &mut Vec<Interval<T>>, iv: Interval<T>) {
    if iv.is_empty() {
        return;
    }
    if let Some(last) = result.last_mut() {
        if let Some(merged) = last.hull(&iv) {
            *last = merged;
            return;
        }
    }
    result.push(iv);
}

/// Brings an arbitrary list of intervals into canonical form.
///
/// Empties are dropped, the rest sorted by the interval ordering and swept
/// left to right, fusing every interval that overlaps or touches the current
/// run. The output is sorted, pairwise disjoint and pairwise non-adjacent,
/// and `normalize` is a fixed point on it.
pub(crate) fn normalize<T: Scalar>(mut intervals: Vec<Interval<T>>) -> Vec<Interval<T>> {
    let input_len = intervals.len();
    intervals.retain(|iv| !iv.is_empty());
    // Non-empty intervals never carry NaN bounds, so the comparison is total here.
    intervals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut merged = Vec::with_capacity(intervals.len());
    for iv in intervals {
        merge_into(&mut merged, iv);
    }

    log::trace!(
        "normalize: {} intervals in, {} components out",
        input_len,
        merged.len()
    );
    merged
}
