//! Live temperature reader backed by sysfs input files

use crate::coretemp::{read_millidegrees, DiscoveredSensor};
use std::path::PathBuf;
use thermtop_core::{SampleReader, Sensor, SensorReadError};

/// Reads `tempN_input` files, one per sensor in sensor-set order
#[derive(Debug, Clone)]
pub struct SysfsReader {
    inputs: Vec<PathBuf>,
}

impl SysfsReader {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }

    pub fn from_discovered(discovered: &[DiscoveredSensor]) -> Self {
        Self::new(discovered.iter().map(|d| d.input.clone()).collect())
    }
}

impl SampleReader for SysfsReader {
    fn read_raw(&mut self, sensor: &Sensor) -> Result<i64, SensorReadError> {
        let path = self
            .inputs
            .get(sensor.index)
            .ok_or_else(|| SensorReadError::new(sensor.index, "no input file for sensor"))?;
        read_millidegrees(path).map_err(|e| SensorReadError::new(sensor.index, format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretemp::discover;
    use crate::coretemp::tests::fake_sysfs;
    use std::fs;
    use thermtop_core::SensorSet;

    #[test]
    fn test_reads_current_values() {
        let root = fake_sysfs(&[
            (1, Some("Core 0"), Some(100_000), Some(84_000), 45_900),
            (2, Some("Core 1"), Some(100_000), Some(84_000), 51_000),
        ]);
        let discovered = discover(root.path()).unwrap();
        let set = SensorSet::new(discovered.iter().map(|d| d.sensor.clone()).collect()).unwrap();
        let mut reader = SysfsReader::from_discovered(&discovered);

        let samples = reader.read_all(&set).unwrap();
        assert_eq!(samples.as_slice(), &[45, 51]);

        // Values are re-read on every tick
        fs::write(&discovered[1].input, "63000\n").unwrap();
        let samples = reader.read_all(&set).unwrap();
        assert_eq!(samples.as_slice(), &[45, 63]);
    }

    #[test]
    fn test_vanished_input_is_read_error() {
        let root = fake_sysfs(&[(1, Some("Core 0"), None, None, 40_000)]);
        let discovered = discover(root.path()).unwrap();
        let set = SensorSet::new(vec![discovered[0].sensor.clone()]).unwrap();
        let mut reader = SysfsReader::from_discovered(&discovered);

        fs::remove_file(&discovered[0].input).unwrap();
        let err = reader.read_all(&set).unwrap_err();
        assert_eq!(err.index, 0);
    }

    #[test]
    fn test_garbage_value_is_read_error() {
        let root = fake_sysfs(&[(1, Some("Core 0"), None, None, 40_000)]);
        let discovered = discover(root.path()).unwrap();
        let set = SensorSet::new(vec![discovered[0].sensor.clone()]).unwrap();
        let mut reader = SysfsReader::from_discovered(&discovered);

        fs::write(&discovered[0].input, "not a number\n").unwrap();
        let err = reader.read_all(&set).unwrap_err();
        assert!(err.reason.contains("invalid reading"));
    }
}
