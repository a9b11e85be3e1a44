use std::fmt::Display;

use crate::basic_types::TimePoint;
use crate::basic_types::Weight;

/// The two kinds of constraints a temporal network is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Controllable,
    Contingent,
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Controllable => write!(f, "controllable"),
            EdgeKind::Contingent => write!(f, "contingent"),
        }
    }
}

/// A requirement `to - from ∈ [lower_bound, upper_bound]`, where the executing agent chooses when
/// `to` happens.
///
/// A valid controllable edge has `0 <= lower_bound <= upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllableEdge {
    pub from: TimePoint,
    pub to: TimePoint,
    pub lower_bound: Weight,
    pub upper_bound: Weight,
}

/// A duration `to - from ∈ [lower_bound, upper_bound]` chosen by the environment. `from` is the
/// activation time point and `to` the contingent time point, which the agent only observes once
/// it has happened.
///
/// A valid contingent edge has `0 < lower_bound <= upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContingentEdge {
    pub from: TimePoint,
    pub to: TimePoint,
    pub lower_bound: Weight,
    pub upper_bound: Weight,
}

impl ControllableEdge {
    /// Whether every duration allowed by `self` is also allowed by `other`, on the same pair of
    /// time points.
    pub fn is_within(&self, other: &ControllableEdge) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.lower_bound >= other.lower_bound
            && self.upper_bound <= other.upper_bound
    }
}

/// Either kind of edge, as handed out by [`TemporalNetwork::edges`].
///
/// [`TemporalNetwork::edges`]: super::TemporalNetwork::edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Controllable(ControllableEdge),
    Contingent(ContingentEdge),
}

impl Edge {
    pub fn kind(&self) -> EdgeKind {
        match self {
            Edge::Controllable(_) => EdgeKind::Controllable,
            Edge::Contingent(_) => EdgeKind::Contingent,
        }
    }

    pub fn source(&self) -> TimePoint {
        match self {
            Edge::Controllable(edge) => edge.from,
            Edge::Contingent(edge) => edge.from,
        }
    }

    pub fn target(&self) -> TimePoint {
        match self {
            Edge::Controllable(edge) => edge.to,
            Edge::Contingent(edge) => edge.to,
        }
    }

    pub fn bounds(&self) -> (Weight, Weight) {
        match self {
            Edge::Controllable(edge) => (edge.lower_bound, edge.upper_bound),
            Edge::Contingent(edge) => (edge.lower_bound, edge.upper_bound),
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lower_bound, upper_bound) = self.bounds();
        write!(
            f,
            "{} -> {} [{lower_bound}, {upper_bound}] ({})",
            self.source(),
            self.target(),
            self.kind()
        )
    }
}
