use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the engine has tightened `budget` edges.
///
/// Unlike [`TimeBudget`](super::TimeBudget), this gives a reproducible cut-off point.
#[derive(Debug, Copy, Clone)]
pub struct RelaxationBudget {
    budget: u64,
    num_relaxations: u64,
}

impl RelaxationBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_relaxations: 0,
        }
    }
}

impl TerminationCondition for RelaxationBudget {
    fn should_stop(&mut self) -> bool {
        self.num_relaxations >= self.budget
    }

    fn edge_has_been_relaxed(&mut self) {
        self.num_relaxations += 1;
    }
}
