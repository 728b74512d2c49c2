//! Error taxonomy for the dashboard.
//!
//! Startup errors ([`DiscoveryError`], [`ConfigError`]) are raised before
//! the terminal is acquired. [`SensorReadError`] and [`RenderError`] happen
//! while the loop is running.

use thiserror::Error;

/// Sensor discovery produced nothing usable
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("no temperature sensors found")]
    NoSensors,
    #[error("sensor discovery failed under {root}: {reason}")]
    Unreadable { root: String, reason: String },
}

/// A single sensor could not be read during a sampling tick
#[derive(Debug, Error)]
#[error("failed to read sensor {index}: {reason}")]
pub struct SensorReadError {
    pub index: usize,
    pub reason: String,
}

impl SensorReadError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

/// Invalid startup configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("average period must be at least 1 second, got {0}")]
    AveragePeriod(i64),
    #[error("history length must be at least 1 point, got {0}")]
    HistoryLength(i64),
    #[error("minimum terminal height must be at least 1 row")]
    MinimumHeight,
    #[error("tick interval must be greater than zero")]
    TickInterval,
}

/// The renderer collaborator failed to draw a view model
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Any error that ends a dashboard run
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    SensorRead(#[from] SensorReadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
