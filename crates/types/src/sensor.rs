//! Sensor identity and per-tick sample types.

use serde::{Deserialize, Serialize};

/// A single per-core temperature input discovered at startup.
///
/// Thresholds are whole degrees Celsius, already scaled down from the
/// millidegree values the kernel exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Position in discovery order, stable for the process lifetime
    pub index: usize,
    /// Display label, e.g. "Core 0" or "Package id 0"
    pub label: String,
    /// Critical temperature in °C
    pub critical_c: i32,
    /// Maximum rated temperature in °C
    pub max_c: i32,
}

impl Sensor {
    pub fn new(index: usize, label: impl Into<String>, critical_c: i32, max_c: i32) -> Self {
        Self {
            index,
            label: label.into(),
            critical_c,
            max_c,
        }
    }
}

/// One instantaneous reading per sensor, in whole °C.
///
/// Same length and order as the sensor set it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSet(Vec<i32>);

impl SampleSet {
    /// An all-zero sample set, used before the first tick completes
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<i32>> for SampleSet {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}

impl FromIterator<i32> for SampleSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
