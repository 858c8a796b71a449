use thiserror::Error;

/// Reasons a component sequence fails the canonical-form check.
///
/// The set algebra itself is total and never produces these; they are
/// reported only when a caller hands in a sequence that claims to be
/// canonical already (see [`IntervalSet::try_from_sorted`]).
///
/// [`IntervalSet::try_from_sorted`]: crate::IntervalSet::try_from_sorted
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalSetError {
    #[error("Component {index} is empty")]
    EmptyComponent { index: usize },

    #[error("Component {index} does not come after component {}", .index - 1)]
    OutOfOrder { index: usize },

    #[error("Component {index} overlaps component {}", .index - 1)]
    Overlapping { index: usize },

    #[error("Component {index} is adjacent to component {} and should be merged", .index - 1)]
    Adjacent { index: usize },
}
