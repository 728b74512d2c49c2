//! Immutable, post-discovery set of sensors.

use crate::error::DiscoveryError;
use thermtop_types::Sensor;

/// Ordered list of sensors, fixed for the life of the dashboard.
///
/// Indices are reassigned to match position so `sensors()[i].index == i`
/// always holds, whatever the discovery collaborator handed over.
#[derive(Debug, Clone)]
pub struct SensorSet {
    sensors: Vec<Sensor>,
}

impl SensorSet {
    /// Build the set from discovery output. An empty list is an error: the
    /// dashboard has nothing to show.
    pub fn new(sensors: Vec<Sensor>) -> Result<Self, DiscoveryError> {
        if sensors.is_empty() {
            return Err(DiscoveryError::NoSensors);
        }

        let sensors = sensors
            .into_iter()
            .enumerate()
            .map(|(index, sensor)| Sensor { index, ..sensor })
            .collect();

        Ok(Self { sensors })
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn get(&self, index: usize) -> Option<&Sensor> {
        self.sensors.get(index)
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sensor> {
        self.sensors.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sensors.iter().map(|s| s.label.as_str())
    }
}

impl<'a> IntoIterator for &'a SensorSet {
    type Item = &'a Sensor;
    type IntoIter = std::slice::Iter<'a, Sensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
