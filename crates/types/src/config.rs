//! Dashboard configuration types.
//!
//! Values are kept as the user wrote them (signed where a user could type a
//! negative number) and validated once at startup by the core crate.

use serde::{Deserialize, Serialize};

/// What to do when a single sensor read fails mid-run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReadErrorPolicy {
    /// Abort the tick and terminate the dashboard
    #[serde(rename = "abort")]
    #[default]
    Abort,
    /// Keep the sensor's last good reading and flag it as stale
    #[serde(rename = "mark_stale")]
    MarkStale,
}

fn default_average_period() -> i64 {
    30
}

fn default_history_length() -> i64 {
    500
}

fn default_minimum_terminal_height() -> u16 {
    36
}

fn default_tick_interval() -> u64 {
    1000 // 1 second default
}

/// Configuration for one dashboard run, immutable once the loop starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of sampling ticks folded into one history point
    #[serde(default = "default_average_period")]
    pub average_period_secs: i64,
    /// Points of history kept per sensor
    #[serde(default = "default_history_length")]
    pub history_length: i64,
    /// Lower bound for the laid-out height when manual height is enabled
    #[serde(default = "default_minimum_terminal_height")]
    pub minimum_terminal_height: u16,
    /// Allow grow/shrink keys to override the terminal height
    #[serde(default)]
    pub manual_height: bool,
    /// Sampling cadence
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub read_error_policy: ReadErrorPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            average_period_secs: default_average_period(),
            history_length: default_history_length(),
            minimum_terminal_height: default_minimum_terminal_height(),
            manual_height: false,
            tick_interval_ms: default_tick_interval(),
            read_error_policy: ReadErrorPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.average_period_secs, 30);
        assert_eq!(config.history_length, 500);
        assert_eq!(config.minimum_terminal_height, 36);
        assert_eq!(config.tick_interval_ms, 1000);
    }

    #[test]
    fn test_policy_serialization() {
        let config = DashboardConfig {
            read_error_policy: ReadErrorPolicy::MarkStale,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"read_error_policy\":\"mark_stale\""));

        let parsed: DashboardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.read_error_policy, ReadErrorPolicy::MarkStale);
    }

    #[test]
    fn test_negative_period_survives_parsing() {
        // Rejected later by validation, not by serde
        let config: DashboardConfig =
            serde_json::from_str(r#"{"average_period_secs": -5}"#).unwrap();
        assert_eq!(config.average_period_secs, -5);
    }
}
