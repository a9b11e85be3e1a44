use log::debug;
use log::log_enabled;
use log::trace;
use log::Level;

use super::all_max::has_negative_all_max_cycle;
use super::labeled_graph::LabeledGraph;
use super::reduction::Contradiction;
use super::reduction::ReductionStatistics;
use super::reduction::Saturation;
use super::reduction::SaturationResult;
use crate::basic_types::DcStatus;
use crate::network::TemporalNetwork;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::stnu_assert_simple;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;

/// The result of saturating a graph. A controllable network keeps its saturated graph, so that
/// later edits can be propagated on top of it.
#[derive(Debug)]
pub(crate) enum SolveOutcome {
    Controllable(LabeledGraph),
    NotControllable,
    Unknown,
}

impl SolveOutcome {
    pub(crate) fn status(&self) -> DcStatus {
        match self {
            SolveOutcome::Controllable(_) => DcStatus::Controllable,
            SolveOutcome::NotControllable => DcStatus::NotControllable,
            SolveOutcome::Unknown => DcStatus::Unknown,
        }
    }
}

/// Decides dynamic controllability of a [`TemporalNetwork`] from scratch.
///
/// The network is turned into a labeled distance graph which is saturated under the reduction
/// rules. The network is dynamically controllable if and only if saturation reaches a fixpoint
/// without deriving a negative self-loop and the AllMax projection of the fixpoint has no negative
/// cycle. The verdict does not depend on the order in which edges were added to the network.
///
/// The network is assumed to be valid, see [`crate::validation::validate`].
///
/// # Example
/// ```
/// # use stnu_core::DcEngine;
/// # use stnu_core::network::TemporalNetwork;
/// let mut network = TemporalNetwork::default();
/// let start = network.new_time_point();
/// let end = network.new_time_point();
/// let reaction = network.new_time_point();
///
/// // The environment decides when `end` happens, somewhere between 1 and 3 after `start`.
/// let _ = network.add_contingent_edge(start, end, 1, 3);
/// // The reaction has to be at most 1 after `end`, and at most 4 after `start`.
/// let _ = network.add_controllable_edge(end, reaction, 0, 1);
/// let _ = network.add_controllable_edge(start, reaction, 0, 4);
///
/// assert!(DcEngine::default().solve(&network));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DcEngine {
    statistics: ReductionStatistics,
}

impl DcEngine {
    /// Decides whether the network is dynamically controllable.
    pub fn solve(&mut self, network: &TemporalNetwork) -> bool {
        let status = self.solve_with_termination(network, &mut Indefinite);
        stnu_assert_simple!(status != DcStatus::Unknown);

        status == DcStatus::Controllable
    }

    /// Decides whether the network is dynamically controllable, giving up with
    /// [`DcStatus::Unknown`] when `termination` triggers.
    pub fn solve_with_termination<T: TerminationCondition>(
        &mut self,
        network: &TemporalNetwork,
        termination: &mut T,
    ) -> DcStatus {
        self.saturate(network, termination).status()
    }

    pub fn statistics(&self) -> ReductionStatistics {
        self.statistics
    }

    pub fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }

    pub(crate) fn saturate<T: TerminationCondition>(
        &mut self,
        network: &TemporalNetwork,
        termination: &mut T,
    ) -> SolveOutcome {
        debug!(
            "saturating a network with {} time points and {} edges",
            network.num_time_points(),
            network.num_edges()
        );

        let mut graph = LabeledGraph::new(network.num_time_points());
        let mut saturation = Saturation::new(&mut graph, termination, &mut self.statistics);

        let result = match seed_network(&mut saturation, network) {
            Ok(()) => saturation.run(),
            Err(contradiction) => SaturationResult::Contradiction(contradiction),
        };

        conclude(graph, result)
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut ReductionStatistics {
        &mut self.statistics
    }
}

fn seed_network<T: TerminationCondition>(
    saturation: &mut Saturation<'_, T>,
    network: &TemporalNetwork,
) -> Result<(), Contradiction> {
    for edge in network.contingent_edges() {
        saturation.seed_contingent(edge)?;
    }

    for edge in network.controllable_edges() {
        saturation.seed_controllable(edge)?;
    }

    Ok(())
}

/// Turns the result of a saturation into a verdict, checking the AllMax projection of a fixpoint.
pub(crate) fn conclude(graph: LabeledGraph, result: SaturationResult) -> SolveOutcome {
    match result {
        SaturationResult::Fixpoint => {
            if has_negative_all_max_cycle(&graph) {
                debug!("not dynamically controllable: {}", Contradiction::NegativeAllMaxCycle);
                SolveOutcome::NotControllable
            } else {
                debug!("dynamically controllable");
                if log_enabled!(Level::Trace) {
                    for edge in graph.labeled_edges() {
                        trace!("saturated edge {edge}");
                    }
                }
                SolveOutcome::Controllable(graph)
            }
        }
        SaturationResult::Contradiction(contradiction) => {
            debug!("not dynamically controllable: {contradiction}");
            SolveOutcome::NotControllable
        }
        SaturationResult::Interrupted => {
            debug!("saturation was interrupted");
            SolveOutcome::Unknown
        }
    }
}
