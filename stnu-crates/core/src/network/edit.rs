use super::ControllableEdge;
use super::ContingentEdge;
use crate::basic_types::TimePoint;

/// A single mutation of a [`TemporalNetwork`](super::TemporalNetwork), recorded so that dynamic
/// controllability can be rechecked incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    AddTimePoint(TimePoint),
    AddControllable(ControllableEdge),
    AddContingent(ContingentEdge),
    /// Every edge on the ordered pair `(from, to)` was removed.
    Remove { from: TimePoint, to: TimePoint },
    UpdateControllable {
        previous: ControllableEdge,
        current: ControllableEdge,
    },
}

impl Edit {
    /// Whether the edit only adds constraints (or uncertainty) to the network.
    ///
    /// Such an edit can never turn a network which is not dynamically controllable into one that
    /// is, and its effect can be propagated on top of a previously saturated graph.
    pub fn only_restricts(&self) -> bool {
        match self {
            Edit::AddTimePoint(_) | Edit::AddControllable(_) | Edit::AddContingent(_) => true,
            Edit::Remove { .. } => false,
            Edit::UpdateControllable { previous, current } => current.is_within(previous),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controllable(lower_bound: i64, upper_bound: i64) -> ControllableEdge {
        ControllableEdge {
            from: TimePoint::new(1),
            to: TimePoint::new(2),
            lower_bound,
            upper_bound,
        }
    }

    #[test]
    fn tightening_an_edge_only_restricts() {
        let edit = Edit::UpdateControllable {
            previous: controllable(0, 10),
            current: controllable(2, 8),
        };

        assert!(edit.only_restricts());
    }

    #[test]
    fn widening_an_edge_does_not_only_restrict() {
        let edit = Edit::UpdateControllable {
            previous: controllable(2, 8),
            current: controllable(2, 9),
        };

        assert!(!edit.only_restricts());
    }

    #[test]
    fn removal_does_not_only_restrict() {
        let edit = Edit::Remove {
            from: TimePoint::new(1),
            to: TimePoint::new(2),
        };

        assert!(!edit.only_restricts());
    }
}
