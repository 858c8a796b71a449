use super::assertions::is_canonical;
use crate::interval::Interval;
use crate::scalar::Scalar;

/// Returns the complement of a canonical sequence within `bounds`.
///
/// Components are clipped to `bounds` and the gaps around them are emitted
/// left to right. Each gap end takes the negated closedness of the component
/// it touches, and the outermost ends take the closedness of `bounds`, so
/// empty gaps (a component flush with a bound) vanish on construction.
pub(crate) fn compute_complement<T: Scalar>(
    canonical: &[Interval<T>],
    bounds: Interval<T>,
) -> Vec<Interval<T>> {
    debug_assert!(is_canonical(canonical));

    let (Some(lower), Some(upper)) = (bounds.lower_bound(), bounds.upper_bound()) else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(canonical.len() + 1);
    let mut cursor = lower;
    let mut cursor_closed = bounds.is_left_closed();

    for clipped in canonical.iter().map(|iv| iv.intersect(&bounds)) {
        let (Some(start), Some(end)) = (clipped.lower_bound(), clipped.upper_bound()) else {
            continue;
        };
        push_gap(
            &mut result,
            Interval::new(cursor, start, cursor_closed, !clipped.is_left_closed()),
        );
        // advance past this component
        cursor = end;
        cursor_closed = !clipped.is_right_closed();
    }
    push_gap(
        &mut result,
        Interval::new(cursor, upper, cursor_closed, bounds.is_right_closed()),
    );

    log::trace!(
        "complement: {} components -> {} gaps",
        canonical.len(),
        result.len()
    );
    result
}

fn push_gap<T: Scalar>(result: &mut Vec<Interval<T>>, gap: Interval<T>) {
    if !gap.is_empty() {
        result.push(gap);
    }
}
