//! thermtop-types: Shared data types for the thermtop dashboard.
//!
//! This crate contains pure data types (sensors, samples, severity,
//! events, configuration) shared across all thermtop crates. It has no
//! terminal or file-system dependencies.

pub mod config;
pub mod event;
pub mod sensor;
pub mod severity;

// Re-export commonly used types at the crate root for convenience
pub use config::{DashboardConfig, ReadErrorPolicy};
pub use event::DashboardEvent;
pub use sensor::{SampleSet, Sensor};
pub use severity::{Severity, WARNING_MARGIN_C};
