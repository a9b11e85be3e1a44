use log::debug;

use crate::basic_types::DcStatus;
use crate::create_statistics_struct;
use crate::engine::IncrementalDcEngine;
use crate::network::Edit;
use crate::network::TemporalNetwork;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::TerminationCondition;

create_statistics_struct!(
    /// How the queries to a [`DcStatusCache`] were answered.
    CacheStatistics {
        num_queries: u64,
        num_cache_hits: u64,
        num_solves: u64,
    }
);

/// Remembers the dynamic controllability verdict until the network is mutated.
///
/// Every mutation calls [`DcStatusCache::invalidate`]. The first query after that solves the
/// network, incrementally if the engine remembers a previous verdict and from scratch otherwise;
/// later queries are answered from the cache. An interrupted solve is not cached.
#[derive(Debug, Clone, Copy)]
pub struct DcStatusCache {
    cached: Option<bool>,
    dirty: bool,
    statistics: CacheStatistics,
}

impl Default for DcStatusCache {
    fn default() -> Self {
        DcStatusCache {
            cached: None,
            dirty: true,
            statistics: CacheStatistics::default(),
        }
    }
}

impl DcStatusCache {
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the network changed since the last verdict.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The cached verdict, if it is still up to date.
    pub fn cached(&self) -> Option<bool> {
        if self.dirty {
            None
        } else {
            self.cached
        }
    }

    pub fn statistics(&self) -> CacheStatistics {
        self.statistics
    }

    pub fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }

    /// Returns the verdict for `network`, solving it only if the network changed since the last
    /// verdict. `pending_edits` are the edits since the last verdict; they are consumed by a solve.
    pub fn query<T: TerminationCondition>(
        &mut self,
        network: &TemporalNetwork,
        engine: &mut IncrementalDcEngine,
        pending_edits: &mut Vec<Edit>,
        termination: &mut T,
    ) -> DcStatus {
        self.statistics.num_queries += 1;

        if let Some(is_controllable) = self.cached() {
            self.statistics.num_cache_hits += 1;
            return DcStatus::from(is_controllable);
        }

        self.statistics.num_solves += 1;
        let status = if engine.has_prior_state() {
            debug!("rechecking after {} edit(s)", pending_edits.len());
            engine.recheck_all(network, pending_edits, termination)
        } else {
            engine.solve(network, termination)
        };
        pending_edits.clear();

        match status.verdict() {
            Some(is_controllable) => {
                self.cached = Some(is_controllable);
                self.dirty = false;
            }
            None => {
                self.cached = None;
            }
        }

        status
    }
}
