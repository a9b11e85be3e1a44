use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combine two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn edge_has_been_relaxed(&mut self) {
        self.t1.edge_has_been_relaxed();
        self.t2.edge_has_been_relaxed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::Indefinite;
    use crate::termination::RelaxationBudget;

    #[test]
    fn stops_when_either_condition_stops() {
        let mut combinator = Combinator::new(Indefinite, RelaxationBudget::new(1));
        assert!(!combinator.should_stop());

        combinator.edge_has_been_relaxed();

        assert!(combinator.should_stop());
    }
}
