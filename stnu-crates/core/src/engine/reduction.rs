//! Saturation of a [`LabeledGraph`] under the reduction rules for dynamic controllability.
//!
//! Every tightened edge is put on an [`EdgeQueue`]; when it is popped it is combined with every
//! edge it can meet in one of the rules below, and every strictly tighter result is enqueued in
//! turn.
//!
//! - No-case: `X --x--> Y` and `Y --y--> Z` give `X --x+y--> Z`.
//! - Upper-case: `D --y--> X` and `X --C:x--> A` give `D --C:x+y--> A`, unless `D` is `C`.
//!   The link `A -> C` itself contributes `C --C:-upper_bound--> A`.
//! - Label removal: `D --C:z--> A` with `z >= -lower_bound(C)` gives `D --z--> A`.
//! - Lower-case: `A --c:x--> C` and `C --y--> D` with `y < 0` give `A --x+y--> D`.
//! - Cross-case: `A --c:x--> C` and `C --B:y--> D` with `y < 0` and `B != C` give
//!   `A --B:x+y--> D`, unless `A` is `B`.
//!
//! A negative self-loop, ordinary or upper-case, means the network is not dynamically
//! controllable. So does a weight below [`LabeledGraph::weight_floor`], which also guarantees that
//! the saturation terminates. A derived edge is the reduction of a semi-reducible walk through the
//! seeded edges, and a walk lighter than the floor contains a negative cycle; by the
//! characterisation of Morris (CP 2006, CPAIOR 2014) that cycle is semi-reducible, so the network
//! is not dynamically controllable.
//!
//! Only ordinary and upper-case entries change, `N * (N + K)` of them for `N` time points and `K`
//! contingent links. The queue is processed in passes like Bellman-Ford: every entry changes at
//! most once per pass and the number of passes is bounded by the length of the longest derivation,
//! at most `(N + K)^2` seeded edges. That gives `O(N * (N + K)^3)` processed changes, each combined
//! with `O(N + K)` edges, independently of the magnitude of the weights.

use std::fmt::Display;

use log::debug;
use log::trace;

use super::edge_queue::Change;
use super::edge_queue::EdgeQueue;
use super::labeled_graph::ContingentLink;
use super::labeled_graph::LabeledGraph;
use super::labeled_graph::LinkId;
use crate::basic_types::TimePoint;
use crate::basic_types::Weight;
use crate::containers::StorageKey;
use crate::create_statistics_struct;
use crate::network::ContingentEdge;
use crate::network::ControllableEdge;
use crate::termination::TerminationCondition;

create_statistics_struct!(
    /// How often the reduction rules tightened an edge of the labeled graph.
    ReductionStatistics {
        num_seeded_edges: u64,
        num_processed_changes: u64,
        num_no_case_reductions: u64,
        num_upper_case_reductions: u64,
        num_lower_case_reductions: u64,
        num_cross_case_reductions: u64,
        num_label_removals: u64,
    }
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReductionRule {
    /// The edge comes from the network itself.
    Initial,
    NoCase,
    UpperCase,
    LowerCase,
    CrossCase,
    LabelRemoval,
}

/// A proof that the network is not dynamically controllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Contradiction {
    NegativeSelfLoop {
        time_point: TimePoint,
        weight: Weight,
        rule: ReductionRule,
    },
    BelowWeightFloor {
        from: TimePoint,
        to: TimePoint,
        weight: Weight,
        rule: ReductionRule,
    },
    NegativeAllMaxCycle,
}

impl Display for Contradiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Contradiction::NegativeSelfLoop {
                time_point,
                weight,
                rule,
            } => write!(
                f,
                "self-loop of weight {weight} at {time_point} derived by {rule:?}"
            ),
            Contradiction::BelowWeightFloor {
                from,
                to,
                weight,
                rule,
            } => write!(
                f,
                "edge {from} -> {to} of weight {weight} derived by {rule:?} is below the floor"
            ),
            Contradiction::NegativeAllMaxCycle => {
                write!(f, "negative cycle in the AllMax projection")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SaturationResult {
    Fixpoint,
    Contradiction(Contradiction),
    Interrupted,
}

/// One run of the reduction rules on a graph, from a set of seeded edges to a fixpoint.
#[derive(Debug)]
pub(crate) struct Saturation<'a, T> {
    graph: &'a mut LabeledGraph,
    queue: EdgeQueue,
    termination: &'a mut T,
    statistics: &'a mut ReductionStatistics,
}

impl<'a, T: TerminationCondition> Saturation<'a, T> {
    pub(crate) fn new(
        graph: &'a mut LabeledGraph,
        termination: &'a mut T,
        statistics: &'a mut ReductionStatistics,
    ) -> Self {
        Saturation {
            graph,
            queue: EdgeQueue::default(),
            termination,
            statistics,
        }
    }

    /// Adds `to - from <= upper_bound` and `from - to <= -lower_bound`.
    pub(crate) fn seed_controllable(
        &mut self,
        edge: &ControllableEdge,
    ) -> Result<(), Contradiction> {
        self.seed_ordinary(edge.from, edge.to, edge.upper_bound)?;
        self.seed_ordinary(edge.to, edge.from, -edge.lower_bound)
    }

    /// Adds the link to the graph, with its ordinary, upper-case and lower-case edges.
    pub(crate) fn seed_contingent(&mut self, edge: &ContingentEdge) -> Result<(), Contradiction> {
        let link = self.graph.add_link(ContingentLink::from(edge));

        self.seed_ordinary(edge.from, edge.to, edge.upper_bound)?;
        self.seed_ordinary(edge.to, edge.from, -edge.lower_bound)?;

        self.graph.account_for_initial_weight(edge.lower_bound);
        self.graph.account_for_initial_weight(-edge.upper_bound);
        self.derive_upper_case(edge.to, link, -edge.upper_bound, ReductionRule::Initial)?;
        self.queue.enqueue(Change::LowerCase(link));

        Ok(())
    }

    /// Applies the rules until no edge can be tightened any more, a contradiction is found, or the
    /// termination condition triggers.
    pub(crate) fn run(mut self) -> SaturationResult {
        debug!("saturating from {} seeded change(s)", self.queue.len());

        while let Some(change) = self.queue.pop() {
            if self.termination.should_stop() {
                return SaturationResult::Interrupted;
            }

            self.statistics.num_processed_changes += 1;

            let result = match change {
                Change::Ordinary { from, to } => self.propagate_ordinary(from, to),
                Change::UpperCase { source, link } => self.propagate_upper_case(source, link),
                Change::LowerCase(link) => self.propagate_lower_case(link),
            };

            if let Err(contradiction) = result {
                return SaturationResult::Contradiction(contradiction);
            }
        }

        SaturationResult::Fixpoint
    }

    fn seed_ordinary(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        weight: Weight,
    ) -> Result<(), Contradiction> {
        self.graph.account_for_initial_weight(weight);
        self.derive_ordinary(from, to, weight, ReductionRule::Initial)
    }

    fn propagate_ordinary(&mut self, from: TimePoint, to: TimePoint) -> Result<(), Contradiction> {
        let Some(weight) = self.graph.ordinary(from, to) else {
            return Ok(());
        };

        for index in 0..self.graph.num_time_points() {
            let other = TimePoint::create_from_index(index);

            if let Some(next) = self.graph.ordinary(to, other) {
                self.derive_ordinary(
                    from,
                    other,
                    weight.saturating_add(next),
                    ReductionRule::NoCase,
                )?;
            }

            if let Some(previous) = self.graph.ordinary(other, from) {
                self.derive_ordinary(
                    other,
                    to,
                    previous.saturating_add(weight),
                    ReductionRule::NoCase,
                )?;
            }
        }

        for index in 0..self.graph.num_links() {
            let link = LinkId::create_from_index(index);

            if let Some(upper_case) = self.graph.upper_case(to, link) {
                self.derive_upper_case(
                    from,
                    link,
                    weight.saturating_add(upper_case),
                    ReductionRule::UpperCase,
                )?;
            }
        }

        if weight < 0 {
            if let Some(link) = self.graph.link_with_contingent(from) {
                let ContingentLink {
                    activation,
                    lower_bound,
                    ..
                } = *self.graph.link(link);

                self.derive_ordinary(
                    activation,
                    to,
                    lower_bound.saturating_add(weight),
                    ReductionRule::LowerCase,
                )?;
            }
        }

        Ok(())
    }

    fn propagate_upper_case(
        &mut self,
        source: TimePoint,
        link: LinkId,
    ) -> Result<(), Contradiction> {
        let Some(weight) = self.graph.upper_case(source, link) else {
            return Ok(());
        };

        for index in 0..self.graph.num_time_points() {
            let other = TimePoint::create_from_index(index);

            if let Some(previous) = self.graph.ordinary(other, source) {
                self.derive_upper_case(
                    other,
                    link,
                    previous.saturating_add(weight),
                    ReductionRule::UpperCase,
                )?;
            }
        }

        if weight < 0 {
            if let Some(lower_case_link) = self.graph.link_with_contingent(source) {
                if lower_case_link != link {
                    let ContingentLink {
                        activation,
                        lower_bound,
                        ..
                    } = *self.graph.link(lower_case_link);

                    self.derive_upper_case(
                        activation,
                        link,
                        lower_bound.saturating_add(weight),
                        ReductionRule::CrossCase,
                    )?;
                }
            }
        }

        let ContingentLink {
            activation,
            lower_bound,
            ..
        } = *self.graph.link(link);
        if weight >= -lower_bound {
            self.derive_ordinary(source, activation, weight, ReductionRule::LabelRemoval)?;
        }

        Ok(())
    }

    fn propagate_lower_case(&mut self, link: LinkId) -> Result<(), Contradiction> {
        let ContingentLink {
            activation,
            contingent,
            lower_bound,
            ..
        } = *self.graph.link(link);

        for index in 0..self.graph.num_time_points() {
            let other = TimePoint::create_from_index(index);

            match self.graph.ordinary(contingent, other) {
                Some(weight) if weight < 0 => self.derive_ordinary(
                    activation,
                    other,
                    lower_bound.saturating_add(weight),
                    ReductionRule::LowerCase,
                )?,
                _ => {}
            }
        }

        for index in 0..self.graph.num_links() {
            let other_link = LinkId::create_from_index(index);
            if other_link == link {
                continue;
            }

            match self.graph.upper_case(contingent, other_link) {
                Some(weight) if weight < 0 => self.derive_upper_case(
                    activation,
                    other_link,
                    lower_bound.saturating_add(weight),
                    ReductionRule::CrossCase,
                )?,
                _ => {}
            }
        }

        Ok(())
    }

    fn derive_ordinary(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        weight: Weight,
        rule: ReductionRule,
    ) -> Result<(), Contradiction> {
        if from == to {
            return if weight < 0 {
                Err(Contradiction::NegativeSelfLoop {
                    time_point: from,
                    weight,
                    rule,
                })
            } else {
                Ok(())
            };
        }

        if weight < self.graph.weight_floor() {
            return Err(Contradiction::BelowWeightFloor {
                from,
                to,
                weight,
                rule,
            });
        }

        if self.graph.tighten_ordinary(from, to, weight) {
            trace!("{rule:?}: {from} --{weight}--> {to}");
            self.record(rule);
            self.queue.enqueue(Change::Ordinary { from, to });
        }

        Ok(())
    }

    fn derive_upper_case(
        &mut self,
        source: TimePoint,
        link: LinkId,
        weight: Weight,
        rule: ReductionRule,
    ) -> Result<(), Contradiction> {
        let ContingentLink {
            activation,
            contingent,
            ..
        } = *self.graph.link(link);

        if source == activation {
            return if weight < 0 {
                Err(Contradiction::NegativeSelfLoop {
                    time_point: source,
                    weight,
                    rule,
                })
            } else {
                Ok(())
            };
        }

        // The only upper-case edge out of its own contingent point is the one of the link itself.
        if source == contingent && rule != ReductionRule::Initial {
            return Ok(());
        }

        if weight < self.graph.weight_floor() {
            return Err(Contradiction::BelowWeightFloor {
                from: source,
                to: activation,
                weight,
                rule,
            });
        }

        if self.graph.tighten_upper_case(source, link, weight) {
            trace!("{rule:?}: {source} --{contingent}:{weight}--> {activation}");
            self.record(rule);
            self.queue.enqueue(Change::UpperCase { source, link });
        }

        Ok(())
    }

    fn record(&mut self, rule: ReductionRule) {
        self.termination.edge_has_been_relaxed();

        let counter = match rule {
            ReductionRule::Initial => &mut self.statistics.num_seeded_edges,
            ReductionRule::NoCase => &mut self.statistics.num_no_case_reductions,
            ReductionRule::UpperCase => &mut self.statistics.num_upper_case_reductions,
            ReductionRule::LowerCase => &mut self.statistics.num_lower_case_reductions,
            ReductionRule::CrossCase => &mut self.statistics.num_cross_case_reductions,
            ReductionRule::LabelRemoval => &mut self.statistics.num_label_removals,
        };
        *counter += 1;
    }
}
