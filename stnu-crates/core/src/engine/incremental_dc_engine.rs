use log::debug;

use super::dc_engine::conclude;
use super::dc_engine::DcEngine;
use super::dc_engine::SolveOutcome;
use super::labeled_graph::LabeledGraph;
use super::reduction::Contradiction;
use super::reduction::Saturation;
use super::reduction::SaturationResult;
use crate::basic_types::DcStatus;
use crate::create_statistics_struct;
use crate::network::Edit;
use crate::network::TemporalNetwork;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::stnu_assert_simple;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;

create_statistics_struct!(
    /// How the incremental engine answered its queries.
    IncrementalStatistics {
        num_full_solves: u64,
        num_incremental_solves: u64,
        num_short_circuits: u64,
    }
);

/// What is remembered about the network as it was at the last verdict.
#[derive(Debug)]
enum PriorState {
    /// The saturated graph of a dynamically controllable network.
    Saturated(LabeledGraph),
    NotControllable,
}

/// Decides dynamic controllability after an edit, reusing the outcome of the previous solve when
/// possible.
///
/// Edits which only restrict the network (new time points, new edges, tightened controllable
/// edges) are propagated on top of the saturated graph of the previous solve, starting from the
/// new edges only. A network which was not dynamically controllable stays so under such edits.
/// Any other edit, or the absence of a previous verdict, leads to a full solve by the [`DcEngine`].
///
/// The answer is always the one a full solve of the edited network would give.
#[derive(Debug, Default)]
pub struct IncrementalDcEngine {
    prior: Option<PriorState>,
    dc_engine: DcEngine,
    statistics: IncrementalStatistics,
}

impl IncrementalDcEngine {
    /// Decides the network from scratch, and remembers the outcome for later edits.
    pub fn solve<T: TerminationCondition>(
        &mut self,
        network: &TemporalNetwork,
        termination: &mut T,
    ) -> DcStatus {
        self.statistics.num_full_solves += 1;

        let outcome = self.dc_engine.saturate(network, termination);
        self.remember(outcome)
    }

    /// Decides the network after `edit` was applied to the network of the previous verdict.
    pub fn recheck(&mut self, network: &TemporalNetwork, edit: &Edit) -> bool {
        let status = self.recheck_all(network, std::slice::from_ref(edit), &mut Indefinite);
        stnu_assert_simple!(status != DcStatus::Unknown);

        status == DcStatus::Controllable
    }

    /// Decides the network after all `edits` were applied, in order, to the network of the
    /// previous verdict.
    pub fn recheck_all<T: TerminationCondition>(
        &mut self,
        network: &TemporalNetwork,
        edits: &[Edit],
        termination: &mut T,
    ) -> DcStatus {
        let Some(prior) = self.prior.take() else {
            debug!("no previous verdict, solving from scratch");
            return self.solve(network, termination);
        };

        if let Some(edit) = edits.iter().find(|edit| !edit.only_restricts()) {
            debug!("{edit:?} relaxes the network, solving from scratch");
            return self.solve(network, termination);
        }

        match prior {
            PriorState::NotControllable => {
                debug!("restricting a network which is not dynamically controllable");
                self.statistics.num_short_circuits += 1;
                self.prior = Some(PriorState::NotControllable);
                DcStatus::NotControllable
            }
            PriorState::Saturated(graph) => {
                self.statistics.num_incremental_solves += 1;
                let outcome = self.propagate_edits(graph, network, edits, termination);
                self.remember(outcome)
            }
        }
    }

    /// Whether a verdict about the network before the pending edits is remembered.
    pub fn has_prior_state(&self) -> bool {
        self.prior.is_some()
    }

    /// Drops the remembered verdict; the next query will be a full solve.
    pub fn forget(&mut self) {
        self.prior = None;
    }

    pub fn statistics(&self) -> IncrementalStatistics {
        self.statistics
    }

    pub fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger.clone());
        self.dc_engine
            .log_statistics(statistic_logger.attach_to_prefix("reductions"));
    }

    fn propagate_edits<T: TerminationCondition>(
        &mut self,
        mut graph: LabeledGraph,
        network: &TemporalNetwork,
        edits: &[Edit],
        termination: &mut T,
    ) -> SolveOutcome {
        graph.grow_to(network.num_time_points());

        let mut saturation =
            Saturation::new(&mut graph, termination, self.dc_engine.statistics_mut());
        let result = match seed_edits(&mut saturation, edits) {
            Ok(()) => saturation.run(),
            Err(contradiction) => SaturationResult::Contradiction(contradiction),
        };

        conclude(graph, result)
    }

    fn remember(&mut self, outcome: SolveOutcome) -> DcStatus {
        let status = outcome.status();

        self.prior = match outcome {
            SolveOutcome::Controllable(graph) => Some(PriorState::Saturated(graph)),
            SolveOutcome::NotControllable => Some(PriorState::NotControllable),
            SolveOutcome::Unknown => None,
        };

        status
    }
}

fn seed_edits<T: TerminationCondition>(
    saturation: &mut Saturation<'_, T>,
    edits: &[Edit],
) -> Result<(), Contradiction> {
    for edit in edits {
        match edit {
            Edit::AddTimePoint(_) => {}
            Edit::AddControllable(edge) => saturation.seed_controllable(edge)?,
            Edit::AddContingent(edge) => saturation.seed_contingent(edge)?,
            Edit::UpdateControllable { current, .. } => saturation.seed_controllable(current)?,
            Edit::Remove { .. } => {
                stnu_assert_simple!(false, "removals are never propagated incrementally");
            }
        }
    }

    Ok(())
}
