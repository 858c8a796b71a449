use std::cmp::Ordering;

use super::assertions::is_canonical;
use crate::interval::{cmp_upper, Interval};
use crate::scalar::Scalar;

/// Computes the intersection of two canonical component sequences.
///
/// Walks both sequences with one cursor each, intersecting the current pair
/// and advancing whichever component ends first. Because the inputs are
/// disjoint and non-adjacent, the output is canonical without a final
/// normalize.
///
/// # Arguments
///
/// * `a` - First canonical sequence
/// * `b` - Second canonical sequence
pub(crate) fn compute_intersection<T: Scalar>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Vec<Interval<T>> {
    debug_assert!(is_canonical(a));
    debug_assert!(is_canonical(b));

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        let common = a[i].intersect(&b[j]);
        if !common.is_empty() {
            result.push(common);
        }

        match cmp_upper(&a[i], &b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    debug_assert!(is_canonical(&result));
    log::trace!(
        "intersection: {} x {} components -> {}",
        a.len(),
        b.len(),
        result.len()
    );
    result
}
