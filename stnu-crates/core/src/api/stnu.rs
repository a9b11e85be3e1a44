use log::debug;

use super::dc_status_cache::CacheStatistics;
use super::dc_status_cache::DcStatusCache;
use crate::basic_types::ConstraintViolation;
use crate::basic_types::DcStatus;
use crate::basic_types::TimePoint;
use crate::basic_types::Weight;
use crate::engine::IncrementalDcEngine;
use crate::engine::IncrementalStatistics;
use crate::network::ContingentEdge;
use crate::network::ControllableEdge;
use crate::network::Edge;
use crate::network::Edit;
use crate::network::TemporalNetwork;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::StatisticLogger;
use crate::stnu_assert_simple;
#[cfg(doc)]
use crate::termination::TimeBudget;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;

/// The main interaction point, which allows building a temporal network and asking whether it is
/// dynamically controllable.
///
/// Every mutation goes through the [`Stnu`], so that the verdict can be cached between mutations
/// and the edits since the last verdict can be propagated incrementally.
///
/// # Example
/// ```rust
/// # use stnu_core::Stnu;
/// let mut stnu = Stnu::default();
/// let start = stnu.new_time_point();
/// let end = stnu.new_time_point();
/// let reaction = stnu.new_time_point();
///
/// let _ = stnu.add_contingent_edge(start, end, 1, 3);
/// let _ = stnu.add_controllable_edge(end, reaction, 0, 1);
/// assert_eq!(Ok(true), stnu.is_dynamically_controllable());
///
/// // The reaction now has to happen at most 2 after `start`, which cannot be guaranteed when `end`
/// // happens at 3.
/// let _ = stnu.add_controllable_edge(start, reaction, 0, 2);
/// assert_eq!(Ok(false), stnu.is_dynamically_controllable());
/// ```
#[derive(Debug, Default)]
pub struct Stnu {
    network: TemporalNetwork,
    cache: DcStatusCache,
    engine: IncrementalDcEngine,
    /// The edits since the last verdict.
    pending_edits: Vec<Edit>,
}

impl Stnu {
    /// Creates an [`Stnu`] for an existing network. Nothing is known about it yet, so the first
    /// query solves it from scratch.
    pub fn from_network(network: TemporalNetwork) -> Self {
        Stnu {
            network,
            ..Default::default()
        }
    }

    pub fn network(&self) -> &TemporalNetwork {
        &self.network
    }

    /// Logs the statistics of the cache and of the engines, if statistic logging is configured.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        log_statistic("num_time_points", self.network.num_time_points());
        log_statistic("num_edges", self.network.num_edges());
        self.cache.log_statistics(StatisticLogger::new(["dc", "cache"]));
        self.engine.log_statistics(StatisticLogger::new(["dc", "engine"]));
        log_statistic_postfix();
    }

    pub fn cache_statistics(&self) -> CacheStatistics {
        self.cache.statistics()
    }

    pub fn engine_statistics(&self) -> IncrementalStatistics {
        self.engine.statistics()
    }
}

/// Methods which change the network
impl Stnu {
    pub fn new_time_point(&mut self) -> TimePoint {
        let time_point = self.network.new_time_point();
        self.record(Edit::AddTimePoint(time_point));

        time_point
    }

    /// Adds the requirement `to - from ∈ [lower_bound, upper_bound]`; see
    /// [`TemporalNetwork::add_controllable_edge`].
    pub fn add_controllable_edge(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    ) -> ControllableEdge {
        let edge = self
            .network
            .add_controllable_edge(from, to, lower_bound, upper_bound);
        self.record(Edit::AddControllable(edge));

        edge
    }

    /// Adds the uncontrollable duration `to - from ∈ [lower_bound, upper_bound]`; see
    /// [`TemporalNetwork::add_contingent_edge`].
    pub fn add_contingent_edge(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    ) -> ContingentEdge {
        let edge = self
            .network
            .add_contingent_edge(from, to, lower_bound, upper_bound);
        self.record(Edit::AddContingent(edge));

        edge
    }

    /// Removes every edge from `from` to `to` and returns them.
    pub fn remove_edge(&mut self, from: TimePoint, to: TimePoint) -> Vec<Edge> {
        let removed = self.network.remove_edge(from, to);
        if !removed.is_empty() {
            self.record(Edit::Remove { from, to });
        }

        removed
    }

    /// Replaces the bounds of the controllable edge from `from` to `to`, adding it if there is
    /// none. Returns the edge as it was before the update.
    pub fn update_controllable_edge(
        &mut self,
        from: TimePoint,
        to: TimePoint,
        lower_bound: Weight,
        upper_bound: Weight,
    ) -> Option<ControllableEdge> {
        let previous = self
            .network
            .update_controllable_edge(from, to, lower_bound, upper_bound);

        let current = ControllableEdge {
            from,
            to,
            lower_bound,
            upper_bound,
        };
        let edit = match previous {
            Some(previous) => Edit::UpdateControllable { previous, current },
            None => Edit::AddControllable(current),
        };
        self.record(edit);

        previous
    }

    /// Removes all time points and edges, and forgets everything known about the network.
    pub fn reset(&mut self) {
        self.network.clear();
        self.pending_edits.clear();
        self.engine.forget();
        self.cache.invalidate();
    }

    fn record(&mut self, edit: Edit) {
        self.pending_edits.push(edit);
        self.cache.invalidate();
    }
}

/// Methods for deciding dynamic controllability
impl Stnu {
    /// Checks the invariants of the network; see [`crate::validation::validate`].
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        self.network.validate()
    }

    /// Decides whether the network is dynamically controllable.
    ///
    /// The network is solved at most once between two mutations. An invalid network is reported
    /// as a [`ConstraintViolation`] instead of a verdict.
    pub fn is_dynamically_controllable(&mut self) -> Result<bool, ConstraintViolation> {
        let status = self.is_dynamically_controllable_within(&mut Indefinite)?;
        stnu_assert_simple!(status != DcStatus::Unknown);

        Ok(status == DcStatus::Controllable)
    }

    /// Decides whether the network is dynamically controllable, giving up with
    /// [`DcStatus::Unknown`] when `termination` triggers (e.g. a [`TimeBudget`]). An unknown
    /// status is not cached.
    pub fn is_dynamically_controllable_within<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
    ) -> Result<DcStatus, ConstraintViolation> {
        if self.cache.is_dirty() {
            self.validate()?;
        }

        let status = self.cache.query(
            &self.network,
            &mut self.engine,
            &mut self.pending_edits,
            termination,
        );
        debug!("dynamically controllable: {status}");

        Ok(status)
    }
}
