//! thermtop-core: Sampling, aggregation and layout engine for thermtop.
//!
//! This crate contains the sensor set, the reader and renderer traits,
//! the dual-cadence aggregation engine, the layout calculator and the
//! controller that drives them. It performs no terminal or file-system I/O
//! itself; readers and renderers are supplied by the caller.

pub mod aggregation;
pub mod constants;
pub mod controller;
pub mod error;
pub mod history;
pub mod layout;
pub mod renderer;
pub mod sample;
pub mod sensor_set;
pub mod settings;

pub use aggregation::{AggregationEngine, AveragingTick};
pub use controller::{ControllerState, DashboardController, DashboardState};
pub use error::{ConfigError, DashboardError, DiscoveryError, RenderError, SensorReadError};
pub use history::{HistorySeries, HistoryWindow};
pub use layout::{ChartRow, Geometry, LayoutEngine, LayoutInput};
pub use renderer::{Renderer, ViewModel};
pub use sample::{classify, millidegrees_to_celsius, read_all, read_each, SampleReader};
pub use sensor_set::SensorSet;
pub use settings::DashboardSettings;

// Re-export types used in trait signatures for convenience
pub use thermtop_types::{DashboardConfig, DashboardEvent, ReadErrorPolicy, SampleSet, Sensor, Severity};
