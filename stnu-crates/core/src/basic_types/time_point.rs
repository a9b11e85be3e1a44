use std::fmt::Display;

use crate::containers::StorageKey;
use crate::stnu_assert_simple;

/// A time point of a temporal network. Time points are identified by `1..=N`, where `N` is the
/// number of time points in the network.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Copy, Hash, Debug)]
pub struct TimePoint {
    id: u32,
}

impl TimePoint {
    /// Creates the time point with the given (one-based) identifier.
    pub fn new(id: u32) -> Self {
        stnu_assert_simple!(id >= 1, "time points are numbered from 1");
        TimePoint { id }
    }

    /// The one-based identifier of this time point.
    pub fn id(self) -> u32 {
        self.id
    }
}

impl StorageKey for TimePoint {
    fn index(&self) -> usize {
        self.id as usize - 1
    }

    fn create_from_index(index: usize) -> Self {
        TimePoint {
            id: index as u32 + 1,
        }
    }
}

impl Display for TimePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_index_is_zero_based() {
        let time_point = TimePoint::new(1);

        assert_eq!(0, time_point.index());
        assert_eq!(time_point, TimePoint::create_from_index(0));
    }

    #[test]
    fn displays_its_identifier() {
        assert_eq!("7", TimePoint::new(7).to_string());
    }
}
