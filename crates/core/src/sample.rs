//! Sample reader trait and related helpers

use crate::constants::MILLIDEGREES_PER_DEGREE;
use crate::error::SensorReadError;
use crate::sensor_set::SensorSet;
use thermtop_types::{SampleSet, Sensor, Severity};

/// Trait for anything that can produce instantaneous sensor readings.
///
/// Implementations only know how to read one raw millidegree value "now";
/// scaling, ordering and failure policy live in the free functions below.
pub trait SampleReader {
    /// Read the current raw value of one sensor, in millidegrees Celsius
    fn read_raw(&mut self, sensor: &Sensor) -> Result<i64, SensorReadError>;

    /// Read every sensor in order, aborting on the first failure
    fn read_all(&mut self, sensors: &SensorSet) -> Result<SampleSet, SensorReadError> {
        read_all(self, sensors)
    }
}

/// Scale a millidegree reading to whole degrees, truncating toward zero.
/// Values beyond the `i32` range saturate.
pub fn millidegrees_to_celsius(raw: i64) -> i32 {
    let degrees = raw / MILLIDEGREES_PER_DEGREE;
    i32::try_from(degrees).unwrap_or(if degrees < 0 { i32::MIN } else { i32::MAX })
}

/// Read all sensors. Any failure aborts the whole tick; no partial sample
/// set is ever returned.
pub fn read_all<R: SampleReader + ?Sized>(
    reader: &mut R,
    sensors: &SensorSet,
) -> Result<SampleSet, SensorReadError> {
    sensors
        .iter()
        .map(|sensor| reader.read_raw(sensor).map(millidegrees_to_celsius))
        .collect()
}

/// Read all sensors, keeping each outcome separately
pub fn read_each<R: SampleReader + ?Sized>(
    reader: &mut R,
    sensors: &SensorSet,
) -> Vec<Result<i32, SensorReadError>> {
    sensors
        .iter()
        .map(|sensor| reader.read_raw(sensor).map(millidegrees_to_celsius))
        .collect()
}

/// Overall severity of a sample set: the worst per-sensor classification
pub fn classify(sensors: &SensorSet, samples: &SampleSet) -> Severity {
    sensors
        .iter()
        .zip(samples.iter())
        .map(|(sensor, value)| Severity::of_reading(value, sensor.max_c))
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that replays fixed raw values and can be told to fail
    struct FixedReader {
        raw: Vec<i64>,
        fail_at: Option<usize>,
        reads: usize,
    }

    impl SampleReader for FixedReader {
        fn read_raw(&mut self, sensor: &Sensor) -> Result<i64, SensorReadError> {
            self.reads += 1;
            if self.fail_at == Some(sensor.index) {
                return Err(SensorReadError::new(sensor.index, "gone"));
            }
            Ok(self.raw[sensor.index])
        }
    }

    fn sensors(n: usize, max_c: i32) -> SensorSet {
        SensorSet::new(
            (0..n)
                .map(|i| Sensor::new(i, format!("Core {}", i), 100, max_c))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_scaling_truncates() {
        assert_eq!(millidegrees_to_celsius(45_000), 45);
        assert_eq!(millidegrees_to_celsius(45_999), 45);
        assert_eq!(millidegrees_to_celsius(999), 0);
        assert_eq!(millidegrees_to_celsius(-1_500), -1);
    }

    #[test]
    fn test_scaling_saturates_out_of_range() {
        assert_eq!(millidegrees_to_celsius(i64::MAX), i32::MAX);
        assert_eq!(millidegrees_to_celsius(i64::MIN), i32::MIN);
        // Would wrap to a negative value with a plain cast
        assert_eq!(millidegrees_to_celsius(3_000_000_000_000), i32::MAX);
    }

    #[test]
    fn test_read_all_in_order() {
        let set = sensors(3, 90);
        let mut reader = FixedReader {
            raw: vec![45_500, 46_000, 47_900],
            fail_at: None,
            reads: 0,
        };
        let samples = reader.read_all(&set).unwrap();
        assert_eq!(samples.as_slice(), &[45, 46, 47]);
    }

    #[test]
    fn test_read_all_aborts_on_failure() {
        let set = sensors(4, 90);
        let mut reader = FixedReader {
            raw: vec![1_000; 4],
            fail_at: Some(1),
            reads: 0,
        };
        let err = read_all(&mut reader, &set).unwrap_err();
        assert_eq!(err.index, 1);
        // Sensors after the failing one are not touched
        assert_eq!(reader.reads, 2);
    }

    #[test]
    fn test_read_each_keeps_other_sensors() {
        let set = sensors(3, 90);
        let mut reader = FixedReader {
            raw: vec![40_000, 41_000, 42_000],
            fail_at: Some(1),
            reads: 0,
        };
        let results = read_each(&mut reader, &set);
        assert_eq!(results[0].as_ref().unwrap(), &40);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap(), &42);
    }

    #[test]
    fn test_classify_worst_wins() {
        let set = sensors(3, 90);
        assert_eq!(classify(&set, &SampleSet::from(vec![50, 50, 50])), Severity::Nominal);
        assert_eq!(classify(&set, &SampleSet::from(vec![50, 66, 50])), Severity::Warning);
        assert_eq!(classify(&set, &SampleSet::from(vec![66, 50, 90])), Severity::Critical);
    }
}
