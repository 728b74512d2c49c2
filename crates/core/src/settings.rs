//! Validated dashboard settings.

use crate::error::ConfigError;
use std::time::Duration;
use thermtop_types::{DashboardConfig, ReadErrorPolicy};

/// A [`DashboardConfig`] that has passed startup validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub average_period: usize,
    pub history_length: usize,
    pub minimum_height: u16,
    pub manual_height: bool,
    pub tick_interval: Duration,
    pub read_error_policy: ReadErrorPolicy,
}

impl TryFrom<&DashboardConfig> for DashboardSettings {
    type Error = ConfigError;

    fn try_from(config: &DashboardConfig) -> Result<Self, Self::Error> {
        if config.average_period_secs < 1 {
            return Err(ConfigError::AveragePeriod(config.average_period_secs));
        }
        if config.history_length < 1 {
            return Err(ConfigError::HistoryLength(config.history_length));
        }
        if config.minimum_terminal_height == 0 {
            return Err(ConfigError::MinimumHeight);
        }
        if config.tick_interval_ms == 0 {
            return Err(ConfigError::TickInterval);
        }

        Ok(Self {
            average_period: config.average_period_secs as usize,
            history_length: config.history_length as usize,
            minimum_height: config.minimum_terminal_height,
            manual_height: config.manual_height,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            read_error_policy: config.read_error_policy,
        })
    }
}

impl TryFrom<DashboardConfig> for DashboardSettings {
    type Error = ConfigError;

    fn try_from(config: DashboardConfig) -> Result<Self, Self::Error> {
        Self::try_from(&config)
    }
}
