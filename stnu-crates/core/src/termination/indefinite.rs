use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. The engine saturates until it reaches a
/// verdict.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
