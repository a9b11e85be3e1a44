use log::trace;

use super::ContingentEdge;
use super::ControllableEdge;
use super::Edge;
use crate::basic_types::ConstraintViolation;
use crate::basic_types::TimePoint;
use crate::basic_types::Weight;
use crate::containers::StorageKey;

/// A simple temporal network with uncertainty: a set of time points with controllable and
/// contingent edges between them.
///
/// The network does not check any of its invariants when it is mutated; an edge with invalid
/// bounds or a duplicate edge is stored as given and only reported by
/// [`TemporalNetwork::validate`].
/// Mentioning a time point which does not exist yet in an edge grows the network so that it does.
///
/// # Example
/// ```
/// # use stnu_core::network::TemporalNetwork;
/// let mut network = TemporalNetwork::default();
/// let start = network.new_time_point();
/// let end = network.new_time_point();
///
/// let _ = network.add_contingent_edge(start, end, 1, 3);
///
/// assert_eq!(2, network.num_time_points());
/// assert_eq!(1, network.num_edges());
/// assert!(network.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemporalNetwork {
    num_time_points: usize,
    controllable_edges: Vec<ControllableEdge>,
    contingent_edges: Vec<ContingentEdge>,
}

impl TemporalNetwork {
    /// Creates a network with the time points `1..=num_time_points` and no edges.
    pub fn with_time_points(num_time_points: usize) -> Self {
        TemporalNetwork {
            num_time_points,
            ..Default::default()
        }
    }

    pub fn new_time_point(&mut self) -> TimePoint {
        self.num_time_points += 1;
        TimePoint::create_from_index(self.num_time_points - 1)
    }

    pub fn num_time_points(&self) -> usize {
        self.num_time_points
    }

    pub fn time_points(&self) -> impl Iterator<Item = TimePoint> {
        (0..self.num_time_points).map(TimePoint::create_from_index)
    }

    /// The total number of edges, of both kinds.
    pub fn num_edges(&self) -> usize {
        self.controllable_edges.len() + self.contingent_edges.len()
    }

    pub fn controllable_edges(&self) -> &[ControllableEdge] {
        &self.controllable_edges
    }

    pub fn contingent_edges(&self) -> &[ContingentEdge] {
        &self.contingent_edges
    }

    /// All edges of the network; first the controllable edges, then the contingent edges, each in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.controllable_edges
            .iter()
            .copied()
            .map(Edge::Controllable)
            .chain(self.contingent_edges.iter().copied().map(Edge::Contingent))
    }

    /// Adds the requirement `to - from ∈ [lower_bound, upper_bound]`.
    pub fn add_controllable_edge(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    ) -> ControllableEdge {
        self.accommodate(from);
        self.accommodate(to);

        let edge = ControllableEdge {
            from,
            to,
            lower_bound,
            upper_bound,
        };
        trace!("adding controllable edge {from} -> {to} [{lower_bound}, {upper_bound}]");
        self.controllable_edges.push(edge);

        edge
    }

    /// Adds the uncontrollable duration `to - from ∈ [lower_bound, upper_bound]`, making `to` a
    /// contingent time point activated by `from`.
    pub fn add_contingent_edge(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    ) -> ContingentEdge {
        self.accommodate(from);
        self.accommodate(to);

        let edge = ContingentEdge {
            from,
            to,
            lower_bound,
            upper_bound,
        };
        trace!("adding contingent edge {from} -> {to} [{lower_bound}, {upper_bound}]");
        self.contingent_edges.push(edge);

        edge
    }

    /// Removes every edge, of either kind, from `from` to `to`. Returns the removed edges; the
    /// result is empty if there was no such edge.
    pub fn remove_edge(&mut self, from: TimePoint, to: TimePoint) -> Vec<Edge> {
        let mut removed = Vec::new();

        self.controllable_edges.retain(|edge| {
            let matches = edge.from == from && edge.to == to;
            if matches {
                removed.push(Edge::Controllable(*edge));
            }
            !matches
        });
        self.contingent_edges.retain(|edge| {
            let matches = edge.from == from && edge.to == to;
            if matches {
                removed.push(Edge::Contingent(*edge));
            }
            !matches
        });

        trace!("removed {} edge(s) {from} -> {to}", removed.len());
        removed
    }

    /// Replaces the bounds of the controllable edge from `from` to `to`.
    ///
    /// Returns the edge as it was before the update, or [`None`] if there was no controllable
    /// edge on this pair; in that case the edge is added.
    pub fn update_controllable_edge(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    ) -> Option<ControllableEdge> {
        let Some(edge) = self
            .controllable_edges
            .iter_mut()
            .find(|edge| edge.from == from && edge.to == to)
        else {
            let _ = self.add_controllable_edge(from, to, lower_bound, upper_bound);
            return None;
        };

        let previous = *edge;
        edge.lower_bound = lower_bound;
        edge.upper_bound = upper_bound;

        Some(previous)
    }

    /// Checks the invariants of the network, see [`crate::validation::validate`].
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        crate::validation::validate(self)
    }

    /// Removes all time points and edges.
    pub fn clear(&mut self) {
        self.num_time_points = 0;
        self.controllable_edges.clear();
        self.contingent_edges.clear();
    }

    fn accommodate(&mut self, time_point: TimePoint) {
        self.num_time_points = self.num_time_points.max(time_point.index() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(id: u32) -> TimePoint {
        TimePoint::new(id)
    }

    #[test]
    fn new_time_points_are_numbered_from_one() {
        let mut network = TemporalNetwork::default();

        assert_eq!(tp(1), network.new_time_point());
        assert_eq!(tp(2), network.new_time_point());
        assert_eq!(2, network.num_time_points());
    }

    #[test]
    fn edges_grow_the_network() {
        let mut network = TemporalNetwork::default();
        let _ = network.add_controllable_edge(tp(1), tp(4), 0, 2);

        assert_eq!(4, network.num_time_points());
        assert_eq!(tp(5), network.new_time_point());
    }

    #[test]
    fn remove_edge_removes_both_kinds_on_the_pair() {
        let mut network = TemporalNetwork::default();
        let controllable = network.add_controllable_edge(tp(1), tp(2), 0, 5);
        let contingent = network.add_contingent_edge(tp(1), tp(2), 1, 5);
        let kept = network.add_controllable_edge(tp(2), tp(1), 0, 5);

        let removed = network.remove_edge(tp(1), tp(2));

        assert_eq!(
            vec![Edge::Controllable(controllable), Edge::Contingent(contingent)],
            removed
        );
        assert_eq!(vec![Edge::Controllable(kept)], network.edges().collect::<Vec<_>>());
    }

    #[test]
    fn remove_missing_edge_removes_nothing() {
        let mut network = TemporalNetwork::default();
        let _ = network.add_controllable_edge(tp(1), tp(2), 0, 5);

        assert!(network.remove_edge(tp(2), tp(1)).is_empty());
        assert_eq!(1, network.num_edges());
    }

    #[test]
    fn update_returns_previous_bounds() {
        let mut network = TemporalNetwork::default();
        let original = network.add_controllable_edge(tp(1), tp(2), 0, 5);

        let previous = network.update_controllable_edge(tp(1), tp(2), 1, 4);

        assert_eq!(Some(original), previous);
        assert_eq!(1, network.controllable_edges()[0].lower_bound);
        assert_eq!(4, network.controllable_edges()[0].upper_bound);
    }

    #[test]
    fn update_of_missing_edge_adds_it() {
        let mut network = TemporalNetwork::default();

        assert_eq!(None, network.update_controllable_edge(tp(1), tp(2), 1, 4));
        assert_eq!(1, network.num_edges());
    }

    #[test]
    fn clear_empties_the_network() {
        let mut network = TemporalNetwork::default();
        let _ = network.add_contingent_edge(tp(1), tp(2), 1, 2);

        network.clear();

        assert_eq!(TemporalNetwork::default(), network);
    }
}
