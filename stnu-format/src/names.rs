use stnu_core::containers::HashMap;
use stnu_core::containers::KeyedVec;
use stnu_core::TimePoint;

/// A bidirectional mapping between the names of time points in a file and the [`TimePoint`]s of
/// the network read from it. Names are assigned time points in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct TimePointNames {
    time_points: HashMap<String, TimePoint>,
    names: KeyedVec<TimePoint, String>,
}

impl TimePointNames {
    /// Returns the time point with the given name, creating the next one if the name is new.
    pub fn time_point_or_insert(&mut self, name: &str) -> TimePoint {
        if let Some(time_point) = self.time_points.get(name) {
            return *time_point;
        }

        let time_point = self.names.push(name.to_owned());
        let _ = self.time_points.insert(name.to_owned(), time_point);

        time_point
    }

    pub fn time_point(&self, name: &str) -> Option<TimePoint> {
        self.time_points.get(name).copied()
    }

    pub fn name(&self, time_point: TimePoint) -> Option<&str> {
        self.names.get(time_point).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The time points with their names, in order of the time points.
    pub fn iter(&self) -> impl Iterator<Item = (TimePoint, &str)> {
        self.names
            .iter_with_keys()
            .map(|(time_point, name)| (time_point, name.as_str()))
    }
}
