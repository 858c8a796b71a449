use std::cmp::Ordering;

use super::assertions::is_canonical;
use super::normalize::merge_into;
use crate::interval::Interval;
use crate::scalar::Scalar;

/// Computes the union of two canonical component sequences.
///
/// Both inputs are already sorted, so a two-cursor merge followed by the same
/// fuse step as [`normalize`](super::normalize) replaces the full re-sort.
///
/// # Returns
///
/// A canonical sequence covering every point of `a` and `b`.
pub(crate) fn compute_union<T: Scalar>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    debug_assert!(is_canonical(a));
    debug_assert!(is_canonical(b));

    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }

    let mut result: Vec<Interval<T>> = Vec::with_capacity(a.len() + b.len());
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        if a[i].partial_cmp(&b[j]) == Some(Ordering::Greater) {
            merge_into(&mut result, b[j]);
            j += 1;
        } else {
            merge_into(&mut result, a[i]);
            i += 1;
        }
    }
    for iv in a[i..].iter().chain(&b[j..]) {
        merge_into(&mut result, *iv);
    }

    log::trace!(
        "union: {} + {} components -> {}",
        a.len(),
        b.len(),
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lower: f64, upper: f64) -> Interval<f64> {
        Interval::closed(lower, upper)
    }

    #[test]
    fn union_disjoint() {
        let u = compute_union(&[iv(0.0, 50.0)], &[iv(100.0, 150.0)]);
        assert_eq!(u, vec![iv(0.0, 50.0), iv(100.0, 150.0)]);
    }

    #[test]
    fn union_overlapping() {
        let u = compute_union(&[iv(0.0, 100.0)], &[iv(50.0, 150.0)]);
        assert_eq!(u, vec![iv(0.0, 150.0)]);
    }

    #[test]
    fn union_adjacent() {
        let u = compute_union(&[iv(0.0, 10.0)], &[Interval::open(10.0, 20.0)]);
        assert_eq!(u, vec![Interval::right_open(0.0, 20.0)]);
    }

    #[test]
    fn union_bridging_component() {
        let u = compute_union(&[iv(0.0, 10.0), iv(20.0, 30.0)], &[iv(5.0, 25.0)]);
        assert_eq!(u, vec![iv(0.0, 30.0)]);
    }

    #[test]
    fn union_with_empty_side() {
        let a = vec![iv(0.0, 1.0), iv(2.0, 3.0)];
        assert_eq!(compute_union(&a, &[]), a);
        assert_eq!(compute_union(&[], &a), a);
    }

    #[test]
    fn union_interleaved() {
        let a = vec![iv(0.0, 1.0), iv(4.0, 5.0), iv(8.0, 9.0)];
        let b = vec![iv(2.0, 3.0), iv(4.5, 6.0)];
        let u = compute_union(&a, &b);
        assert_eq!(
            u,
            vec![iv(0.0, 1.0), iv(2.0, 3.0), iv(4.0, 6.0), iv(8.0, 9.0)]
        );
    }
}
