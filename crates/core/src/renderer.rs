//! Renderer trait and the view model handed to it

use crate::constants::BAR_MAX_BELOW_CRITICAL;
use crate::error::RenderError;
use crate::history::HistoryWindow;
use crate::layout::{ChartRow, Geometry};
use crate::sensor_set::SensorSet;
use thermtop_types::{SampleSet, Severity};

/// Everything a renderer needs to draw one frame.
///
/// History is borrowed from the aggregation engine; building a view model
/// copies no sample data.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub sensors: &'a SensorSet,
    /// Readings from the latest sampling tick
    pub samples: &'a SampleSet,
    pub severity: Severity,
    /// Sensors whose current reading is a held-over value
    pub stale: &'a [bool],
    /// Visible history per sensor, in sensor order
    pub history: Vec<HistoryWindow<'a>>,
    pub geometry: Geometry,
    pub arrangement: &'a [ChartRow],
    /// Sampling ticks per history point
    pub average_period: usize,
}

impl ViewModel<'_> {
    /// Upper bound of the summary bar chart
    pub fn bar_max(&self) -> i32 {
        self.sensors
            .get(0)
            .map(|s| s.critical_c - BAR_MAX_BELOW_CRITICAL)
            .unwrap_or(100)
    }

    pub fn is_stale(&self, sensor: usize) -> bool {
        self.stale.get(sensor).copied().unwrap_or(false)
    }
}

/// Trait for anything that can draw the dashboard.
///
/// Renderers are called synchronously by the controller after every
/// change in visible data or geometry; at most once a second plus once per
/// input event.
pub trait Renderer {
    /// Draw one frame
    fn render(&mut self, view: &ViewModel<'_>) -> Result<(), RenderError>;

    /// Release the drawing surface. Called once when the dashboard quits.
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
