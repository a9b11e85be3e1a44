use thiserror::Error;

use super::TimePoint;
use super::Weight;
use crate::network::EdgeKind;
#[cfg(doc)]
use crate::network::TemporalNetwork;

/// The invariants of a [`TemporalNetwork`] which are checked before dynamic controllability is
/// decided. Each variant carries the edge(s) which break the invariant.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A controllable edge with `lower_bound < 0` or `lower_bound > upper_bound`, or a contingent
    /// edge with `lower_bound <= 0` or `lower_bound > upper_bound`.
    #[error("the {kind} edge {from} -> {to} has invalid bounds [{lower_bound}, {upper_bound}]")]
    InvalidBounds {
        kind: EdgeKind,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    },
    /// Two edges of the same kind constrain the same ordered pair of time points.
    #[error("there is more than one {kind} edge from {from} to {to}")]
    DuplicateEdge {
        kind: EdgeKind,
        from: TimePoint,
        to: TimePoint,
    },
    /// A time point is the target of more than one contingent edge.
    #[error("time point {target} is the target of the contingent edges from {first_source} and {second_source}")]
    MultipleContingentTargets {
        target: TimePoint,
        first_source: TimePoint,
        second_source: TimePoint,
    },
}
