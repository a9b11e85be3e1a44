use std::fmt::Display;

use crate::basic_types::TimePoint;
use crate::basic_types::Weight;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::network::ContingentEdge;
use crate::stnu_assert_moderate;

/// Identifies a contingent link within a [`LabeledGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct LinkId {
    id: u32,
}

impl StorageKey for LinkId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        LinkId { id: index as u32 }
    }
}

/// A contingent link `activation -> contingent` with duration in `[lower_bound, upper_bound]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ContingentLink {
    pub(crate) activation: TimePoint,
    pub(crate) contingent: TimePoint,
    pub(crate) lower_bound: Weight,
    pub(crate) upper_bound: Weight,
}

impl From<&ContingentEdge> for ContingentLink {
    fn from(edge: &ContingentEdge) -> Self {
        ContingentLink {
            activation: edge.from,
            contingent: edge.to,
            lower_bound: edge.lower_bound,
            upper_bound: edge.upper_bound,
        }
    }
}

/// The label of an edge in the labeled distance graph. Upper- and lower-case labels name the
/// contingent time point of their link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum EdgeLabel {
    Ordinary,
    UpperCase(TimePoint),
    LowerCase(TimePoint),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct LabeledEdge {
    pub(crate) from: TimePoint,
    pub(crate) to: TimePoint,
    pub(crate) weight: Weight,
    pub(crate) label: EdgeLabel,
}

impl Display for LabeledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label {
            EdgeLabel::Ordinary => write!(f, "{} --{}--> {}", self.from, self.weight, self.to),
            EdgeLabel::UpperCase(label) => {
                write!(f, "{} --{label}:{}--> {}", self.from, self.weight, self.to)
            }
            EdgeLabel::LowerCase(label) => {
                write!(f, "{} --{label}:{}--> {} (lc)", self.from, self.weight, self.to)
            }
        }
    }
}

/// The labeled distance graph on which the reduction rules operate.
///
/// Ordinary edges are kept in a dense matrix, at most one (the tightest) per ordered pair.
/// An upper-case edge labeled with the contingent point of a link always points at the
/// activation point of that link, so it is stored per link and per source. Lower-case edges never
/// change after a link is added and are represented by the link itself.
///
/// Self-loops are never stored; the reduction engine checks their sign instead.
#[derive(Clone, Debug, Default)]
pub(crate) struct LabeledGraph {
    num_time_points: usize,
    /// Row-major, `from * num_time_points + to`.
    ordinary: Vec<Option<Weight>>,
    links: KeyedVec<LinkId, ContingentLink>,
    link_with_contingent: KeyedVec<TimePoint, Option<LinkId>>,
    /// For every link, the upper-case weight from each source to the activation point.
    upper_case: KeyedVec<LinkId, KeyedVec<TimePoint, Option<Weight>>>,
    /// The sum of the absolute weights of every edge the graph was seeded with.
    absolute_weight_sum: Weight,
}

impl LabeledGraph {
    pub(crate) fn new(num_time_points: usize) -> Self {
        let mut graph = LabeledGraph::default();
        graph.grow_to(num_time_points);
        graph
    }

    pub(crate) fn num_time_points(&self) -> usize {
        self.num_time_points
    }

    pub(crate) fn time_points(&self) -> impl Iterator<Item = TimePoint> {
        (0..self.num_time_points).map(TimePoint::create_from_index)
    }

    /// Makes room for the time points `1..=num_time_points`, keeping all edges.
    pub(crate) fn grow_to(&mut self, num_time_points: usize) {
        if num_time_points <= self.num_time_points {
            return;
        }

        let mut ordinary = vec![None; num_time_points * num_time_points];
        for from in 0..self.num_time_points {
            let old_row = &self.ordinary[from * self.num_time_points..][..self.num_time_points];
            ordinary[from * num_time_points..][..self.num_time_points].copy_from_slice(old_row);
        }

        self.ordinary = ordinary;
        self.num_time_points = num_time_points;
        self.link_with_contingent.resize(num_time_points, None);
        for weights in self.upper_case.iter_mut() {
            weights.resize(num_time_points, None);
        }
    }

    pub(crate) fn ordinary(&self, from: TimePoint, to: TimePoint) -> Option<Weight> {
        self.ordinary[self.offset(from, to)]
    }

    /// Sets the ordinary edge `from -> to` to `weight` if that is strictly tighter than the
    /// current edge. Returns whether the graph changed.
    pub(crate) fn tighten_ordinary(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        weight: Weight,
    ) -> bool {
        stnu_assert_moderate!(from != to, "self-loops are not stored");

        let offset = self.offset(from, to);
        match self.ordinary[offset] {
            Some(current) if current <= weight => false,
            _ => {
                self.ordinary[offset] = Some(weight);
                true
            }
        }
    }

    pub(crate) fn upper_case(&self, source: TimePoint, link: LinkId) -> Option<Weight> {
        self.upper_case[link][source]
    }

    /// Sets the upper-case edge from `source` labeled with `link` to `weight` if that is strictly
    /// tighter than the current edge. Returns whether the graph changed.
    pub(crate) fn tighten_upper_case(
        &mut self,
        source: TimePoint,
        link: LinkId,
        weight: Weight,
    ) -> bool {
        stnu_assert_moderate!(source != self.links[link].activation);

        match self.upper_case[link][source] {
            Some(current) if current <= weight => false,
            _ => {
                self.upper_case[link][source] = Some(weight);
                true
            }
        }
    }

    pub(crate) fn add_link(&mut self, link: ContingentLink) -> LinkId {
        self.grow_to(link.activation.index().max(link.contingent.index()) + 1);

        let id = self.links.push(link);
        let mut weights = KeyedVec::default();
        weights.resize(self.num_time_points, None);
        let _ = self.upper_case.push(weights);
        self.link_with_contingent[link.contingent] = Some(id);

        id
    }

    pub(crate) fn link(&self, link: LinkId) -> &ContingentLink {
        &self.links[link]
    }

    pub(crate) fn link_ids(&self) -> impl Iterator<Item = LinkId> {
        self.links.keys()
    }

    pub(crate) fn num_links(&self) -> usize {
        self.links.len()
    }

    /// The link whose contingent time point is `time_point`, if any.
    pub(crate) fn link_with_contingent(&self, time_point: TimePoint) -> Option<LinkId> {
        self.link_with_contingent[time_point]
    }

    /// Records that an edge of weight `weight` was seeded into the graph.
    pub(crate) fn account_for_initial_weight(&mut self, weight: Weight) {
        self.absolute_weight_sum = self.absolute_weight_sum.saturating_add(weight.saturating_abs());
    }

    /// Every weight derived from the seeded edges is the weight of a walk through them. A walk
    /// lighter than the negated sum of all absolute seeded weights repeats a negative cycle.
    pub(crate) fn weight_floor(&self) -> Weight {
        -self.absolute_weight_sum
    }

    /// All edges currently in the graph: ordinary, upper-case, then lower-case.
    pub(crate) fn labeled_edges(&self) -> Vec<LabeledEdge> {
        let mut edges = Vec::new();

        for from in self.time_points() {
            for to in self.time_points() {
                if let Some(weight) = self.ordinary(from, to) {
                    edges.push(LabeledEdge {
                        from,
                        to,
                        weight,
                        label: EdgeLabel::Ordinary,
                    });
                }
            }
        }

        for (id, link) in self.links.iter_with_keys() {
            for (from, weight) in self.upper_case[id].iter_with_keys() {
                if let Some(weight) = *weight {
                    edges.push(LabeledEdge {
                        from,
                        to: link.activation,
                        weight,
                        label: EdgeLabel::UpperCase(link.contingent),
                    });
                }
            }
        }

        for link in self.links.iter() {
            edges.push(LabeledEdge {
                from: link.activation,
                to: link.contingent,
                weight: link.lower_bound,
                label: EdgeLabel::LowerCase(link.contingent),
            });
        }

        edges
    }

    fn offset(&self, from: TimePoint, to: TimePoint) -> usize {
        from.index() * self.num_time_points + to.index()
    }
}
