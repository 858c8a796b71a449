//! disjoint_intervals - Boolean algebra over sets of disjoint intervals
//!
//! A single interval carries independent open/closed flags on each end and
//! may be unbounded on either side. An [`IntervalSet`] holds any union of
//! intervals in canonical form (sorted, disjoint, non-adjacent) and is closed
//! under union, intersection, complement, difference and symmetric
//! difference.
//!
//! ```rust
//! use disjoint_intervals::{Interval, IntervalSet};
//!
//! let busy = IntervalSet::from(vec![
//!     Interval::closed(9.0, 12.0),
//!     Interval::closed(11.0, 13.0),
//!     Interval::right_open(15.0, 17.0),
//! ]);
//! let day = IntervalSet::from(Interval::closed(8.0, 18.0));
//!
//! let free = &day - &busy;
//! assert_eq!(free.len(), 3);
//! assert!(free.contains(14.0));
//! assert!(free.contains(17.0));
//! assert!(!free.contains(12.5));
//! ```

mod error;
mod interval;
mod interval_set;
mod operations;
pub mod scalar;
pub mod units;

pub use error::IntervalSetError;
pub use interval::Interval;
pub use interval_set::{IntervalSet, IntervalSetBuilder};
pub use operations::{check_canonical, is_canonical};
pub use scalar::{Discrete, Infinite, Numeric, Scalar};

// Re-export unit conversion traits for ergonomic use
pub use units::{convert, SameDim};

/// Interval over the real line.
pub type RealInterval = Interval<f64>;

/// Set of disjoint intervals over the real line.
pub type RealSet = IntervalSet<f64>;

/// Interval over `i64`.
pub type IntegerInterval = Interval<i64>;

/// Set of disjoint intervals over `i64`.
pub type IntegerSet = IntervalSet<i64>;
