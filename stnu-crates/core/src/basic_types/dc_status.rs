use std::fmt::Display;

#[cfg(doc)]
use crate::termination::TerminationCondition;

/// The outcome of a dynamic controllability check which may be interrupted by a
/// [`TerminationCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DcStatus {
    /// A reactive strategy exists which satisfies every constraint.
    Controllable,
    /// No reactive strategy exists.
    NotControllable,
    /// The check was interrupted before a verdict was reached.
    Unknown,
}

impl DcStatus {
    /// Returns the verdict, or [`None`] if there is none.
    pub fn verdict(self) -> Option<bool> {
        match self {
            DcStatus::Controllable => Some(true),
            DcStatus::NotControllable => Some(false),
            DcStatus::Unknown => None,
        }
    }
}

impl From<bool> for DcStatus {
    fn from(is_controllable: bool) -> Self {
        if is_controllable {
            DcStatus::Controllable
        } else {
            DcStatus::NotControllable
        }
    }
}

impl Display for DcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DcStatus::Controllable => write!(f, "yes"),
            DcStatus::NotControllable => write!(f, "no"),
            DcStatus::Unknown => write!(f, "unknown"),
        }
    }
}
