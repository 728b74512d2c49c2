//! coretemp sensor discovery
//!
//! Walks the platform device tree for the sysfs attribute files created by
//! the coretemp driver (`tempN_input`, `tempN_label`, `tempN_crit`,
//! `tempN_max`), groups them per input and reads the static metadata once.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thermtop_core::{DiscoveryError, Sensor};

/// Where the coretemp platform devices live
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/devices/platform";

/// Critical/max threshold used when the driver exposes neither
pub const FALLBACK_THRESHOLD_C: i32 = 100;

/// Matches `.../coretemp.0/.../temp3_input` and friends
static ATTRIBUTE_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"coretemp.*/temp([0-9]+)_(input|label|crit|max)$").expect("valid attribute regex")
});

/// Attribute files found for one temperature input
#[derive(Debug, Default)]
struct AttributeFiles {
    input: Option<PathBuf>,
    label: Option<PathBuf>,
    crit: Option<PathBuf>,
    max: Option<PathBuf>,
}

/// A discovered sensor together with the file its live value is read from
#[derive(Debug, Clone)]
pub struct DiscoveredSensor {
    pub sensor: Sensor,
    pub input: PathBuf,
}

/// Discover every coretemp input under `root`, in a stable order: by
/// device directory, then by input number.
pub fn discover(root: &Path) -> Result<Vec<DiscoveredSensor>, DiscoveryError> {
    log::info!("Scanning {} for coretemp sensors", root.display());

    let mut files = Vec::new();
    walk(root, &mut files).map_err(|e| DiscoveryError::Unreadable {
        root: root.display().to_string(),
        reason: format!("{:#}", e),
    })?;

    // Keyed by (device directory, input number) so temp10 sorts after temp2
    let mut groups: BTreeMap<(PathBuf, u32), AttributeFiles> = BTreeMap::new();
    for path in files {
        let Some(path_str) = path.to_str() else {
            continue;
        };
        let Some(caps) = ATTRIBUTE_FILE.captures(path_str) else {
            continue;
        };
        let Ok(number) = caps[1].parse::<u32>() else {
            continue;
        };
        let kind = caps[2].to_string();
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let entry = groups.entry((dir, number)).or_default();
        match kind.as_str() {
            "input" => entry.input = Some(path),
            "label" => entry.label = Some(path),
            "crit" => entry.crit = Some(path),
            "max" => entry.max = Some(path),
            _ => {}
        }
    }

    let mut sensors = Vec::new();
    for ((_, number), attrs) in groups {
        let Some(input) = attrs.input else {
            log::debug!("temp{} has metadata but no input file, skipping", number);
            continue;
        };

        let label = attrs
            .label
            .as_deref()
            .and_then(|p| read_trimmed(p).ok())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| format!("temp{}", number));
        let critical = attrs.crit.as_deref().and_then(read_threshold);
        let max = attrs.max.as_deref().and_then(read_threshold);
        let (critical_c, max_c) = resolve_thresholds(critical, max);

        let index = sensors.len();
        log::info!(
            "  [{}] {} (crit {}°C, max {}°C) <- {}",
            index,
            label,
            critical_c,
            max_c,
            input.display()
        );
        sensors.push(DiscoveredSensor {
            sensor: Sensor::new(index, label, critical_c, max_c),
            input,
        });
    }

    log::info!("coretemp discovery complete: {} sensors found", sensors.len());
    if sensors.is_empty() {
        return Err(DiscoveryError::NoSensors);
    }
    Ok(sensors)
}

/// Fill in missing thresholds: max falls back to critical and vice versa
fn resolve_thresholds(critical: Option<i32>, max: Option<i32>) -> (i32, i32) {
    match (critical, max) {
        (Some(c), Some(m)) => (c, m),
        (Some(c), None) => (c, c),
        (None, Some(m)) => (m, m),
        (None, None) => (FALLBACK_THRESHOLD_C, FALLBACK_THRESHOLD_C),
    }
}

/// Collect every file below `dir`. Symlinks are not followed; sysfs is
/// full of them and they loop back up the tree.
fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot list {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("cannot list {}", dir.display()))?;
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                log::trace!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if file_type.is_dir() {
            // Unreadable subtrees are common in sysfs; only the root must list
            if let Err(e) = walk(&entry.path(), out) {
                log::trace!("Skipping subtree: {:#}", e);
            }
        } else if file_type.is_file() {
            out.push(entry.path());
        }
    }
    Ok(())
}

fn read_trimmed(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    Ok(content.trim_end_matches('\n').trim().to_string())
}

/// Read a raw millidegree attribute
pub(crate) fn read_millidegrees(path: &Path) -> Result<i64> {
    let content = read_trimmed(path)?;
    content
        .parse::<i64>()
        .with_context(|| format!("invalid reading {:?} in {}", content, path.display()))
}

fn read_threshold(path: &Path) -> Option<i32> {
    match read_millidegrees(path) {
        Ok(raw) => Some(thermtop_core::millidegrees_to_celsius(raw)),
        Err(e) => {
            log::warn!("Ignoring threshold: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Lay out a fake coretemp hwmon directory. Each entry is
    /// (input number, label, crit, max, current) in millidegrees.
    pub(crate) fn fake_sysfs(
        inputs: &[(u32, Option<&str>, Option<i64>, Option<i64>, i64)],
    ) -> TempDir {
        let root = TempDir::new().unwrap();
        let hwmon = root.path().join("coretemp.0/hwmon/hwmon2");
        fs::create_dir_all(&hwmon).unwrap();
        for (n, label, crit, max, current) in inputs {
            fs::write(hwmon.join(format!("temp{}_input", n)), format!("{}\n", current)).unwrap();
            if let Some(label) = label {
                fs::write(hwmon.join(format!("temp{}_label", n)), format!("{}\n", label)).unwrap();
            }
            if let Some(crit) = crit {
                fs::write(hwmon.join(format!("temp{}_crit", n)), format!("{}\n", crit)).unwrap();
            }
            if let Some(max) = max {
                fs::write(hwmon.join(format!("temp{}_max", n)), format!("{}\n", max)).unwrap();
            }
        }
        // Unrelated driver files must be ignored
        let other = root.path().join("acpitz/hwmon/hwmon0");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("temp1_input"), "30000\n").unwrap();
        root
    }

    #[test]
    fn test_discovers_in_numeric_order() {
        let root = fake_sysfs(&[
            (10, Some("Core 8"), Some(100_000), Some(84_000), 50_000),
            (2, Some("Core 0"), Some(100_000), Some(84_000), 45_000),
            (1, Some("Package id 0"), Some(100_000), Some(84_000), 52_000),
        ]);
        let sensors = discover(root.path()).unwrap();

        let labels: Vec<_> = sensors.iter().map(|d| d.sensor.label.as_str()).collect();
        assert_eq!(labels, vec!["Package id 0", "Core 0", "Core 8"]);
        for (i, d) in sensors.iter().enumerate() {
            assert_eq!(d.sensor.index, i);
            assert_eq!(d.sensor.critical_c, 100);
            assert_eq!(d.sensor.max_c, 84);
        }
        assert!(sensors[2].input.ends_with("temp10_input"));
    }

    #[test]
    fn test_missing_metadata_falls_back() {
        let root = fake_sysfs(&[
            (1, None, Some(95_500), None, 40_000),
            (2, Some("Core 1"), None, None, 40_000),
        ]);
        let sensors = discover(root.path()).unwrap();
        assert_eq!(sensors[0].sensor.label, "temp1");
        assert_eq!(sensors[0].sensor.critical_c, 95);
        assert_eq!(sensors[0].sensor.max_c, 95);
        assert_eq!(sensors[1].sensor.critical_c, FALLBACK_THRESHOLD_C);
        assert_eq!(sensors[1].sensor.max_c, FALLBACK_THRESHOLD_C);
    }

    #[test]
    fn test_no_coretemp_is_discovery_error() {
        let root = fake_sysfs(&[]);
        let err = discover(root.path()).unwrap_err();
        assert!(matches!(err, DiscoveryError::NoSensors));
    }

    #[test]
    fn test_missing_root_is_unreadable() {
        let root = TempDir::new().unwrap();
        let err = discover(&root.path().join("does-not-exist")).unwrap_err();
        assert!(matches!(err, DiscoveryError::Unreadable { .. }));
    }

    #[test]
    fn test_resolve_thresholds() {
        assert_eq!(resolve_thresholds(Some(100), Some(84)), (100, 84));
        assert_eq!(resolve_thresholds(None, Some(84)), (84, 84));
        assert_eq!(resolve_thresholds(None, None), (100, 100));
    }
}
