//! Normalization and set algebra over sorted component slices.
//!
//! Every function here takes and returns plain `Vec`s / slices of
//! [`Interval`](crate::Interval)s; [`IntervalSet`](crate::IntervalSet) wraps
//! them and is the only public entry point.

mod assertions;
mod complement;
mod intersection;
mod normalize;
mod union;

pub use assertions::{check_canonical, is_canonical};
pub(crate) use complement::compute_complement;
pub(crate) use intersection::compute_intersection;
pub(crate) use normalize::normalize;
pub(crate) use union::compute_union;
