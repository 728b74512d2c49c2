//! Shared numeric constants for sampling and layout.

/// Raw sysfs readings are in millidegrees Celsius
pub const MILLIDEGREES_PER_DEGREE: i64 = 1000;

/// Smallest height a chart row may have: two border lines plus data
pub const MIN_ROW_HEIGHT: u16 = 4;

/// Columns a history chart spends on its border and y-axis labels
pub const HISTORY_CHART_CHROME: i64 = 18;

/// Columns the summary bar chart spends on its border and padding
pub const BAR_CHART_CHROME: i64 = 3;

/// Gap between bars in the summary chart
pub const BAR_GAP: u16 = 1;

/// The summary chart tops out this many degrees below sensor 0's critical
pub const BAR_MAX_BELOW_CRITICAL: i32 = 10;
