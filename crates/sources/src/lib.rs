//! thermtop-sources: Sensor discovery and readers for thermtop.
//!
//! Discovery runs once at startup and resolves the ordered sensor list;
//! the reader then re-reads each sensor's input file on every tick.

mod coretemp;
mod sysfs_reader;

pub use coretemp::{discover, DiscoveredSensor, DEFAULT_SYSFS_ROOT, FALLBACK_THRESHOLD_C};
pub use sysfs_reader::SysfsReader;

use std::path::Path;
use thermtop_core::{DiscoveryError, SensorSet};

/// Discover sensors under `root` and build the sensor set plus a reader
/// bound to the same order
pub fn open(root: &Path) -> Result<(SensorSet, SysfsReader), DiscoveryError> {
    let discovered = discover(root)?;
    let reader = SysfsReader::from_discovered(&discovered);
    let sensors = SensorSet::new(discovered.into_iter().map(|d| d.sensor).collect())?;
    Ok((sensors, reader))
}
