//! Overall thermal severity of the current sample set.

use serde::{Deserialize, Serialize};

/// Distance below a sensor's max threshold at which it counts as warm
pub const WARNING_MARGIN_C: i32 = 25;

/// Severity of the hottest sensor relative to its own thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "nominal")]
    #[default]
    Nominal,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "critical")]
    Critical,
}

impl Severity {
    /// Classify one reading against a sensor's max threshold
    pub fn of_reading(value_c: i32, max_c: i32) -> Self {
        if value_c >= max_c {
            Severity::Critical
        } else if value_c >= max_c - WARNING_MARGIN_C {
            Severity::Warning
        } else {
            Severity::Nominal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Nominal => "nominal",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
