//! A [`TerminationCondition`] is a condition which is polled by the reduction engine while it
//! saturates the labeled distance graph. It indicates when the engine should stop, even if no
//! verdict has been reached. The most common example would be [`TimeBudget`], which gives the
//! engine a certain time budget to decide dynamic controllability.
//!
//! An interrupted solve is reported as [`DcStatus::Unknown`], never as a negative verdict.
//!
//! [`DcStatus::Unknown`]: crate::DcStatus::Unknown

mod combinator;
mod indefinite;
mod relaxation_budget;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use relaxation_budget::RelaxationBudget;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. A termination condition determines when
/// the engine should give up saturating.
pub trait TerminationCondition {
    /// Returns `true` when the engine should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the engine tightens an edge of the labeled distance graph.
    fn edge_has_been_relaxed(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn edge_has_been_relaxed(&mut self) {
        if let Some(t) = self {
            t.edge_has_been_relaxed()
        }
    }
}
