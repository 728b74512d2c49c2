//! Terminal geometry for the dashboard.
//!
//! Everything here is a pure function of terminal size, sensor count and
//! the configured height floor. There is no hidden state: computing the
//! layout twice with the same inputs yields the same [`Geometry`].
//!
//! Integer division order matters in these formulas; they are written to
//! truncate at exactly the same points as the chart widths they mirror.

use crate::constants::{BAR_CHART_CHROME, HISTORY_CHART_CHROME, MIN_ROW_HEIGHT};

/// Derived layout numbers, always replaced as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Terminal columns the layout was computed for
    pub width: u16,
    /// Rows actually laid out; may exceed the terminal when it is tiny or
    /// when a manual height bound is in effect
    pub height: u16,
    /// Number of chart rows
    pub chart_rows: usize,
    /// Height of every chart row
    pub row_height: u16,
    /// Width of each bar in the summary chart
    pub bar_width: u16,
    /// First history index shown in the history charts
    pub history_window_offset: usize,
}

/// One row of the dashboard grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRow {
    /// Summary bar chart next to the first sensor's history
    Summary { sensor: usize },
    /// Two sensor histories side by side
    Pair { left: usize, right: usize },
    /// A trailing odd sensor on its own
    Single { sensor: usize },
}

/// Inputs to one layout computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    pub width: u16,
    pub height: u16,
    pub sensor_count: usize,
    /// Laid-out height never drops below this (0 disables the bound)
    pub min_height: u16,
    pub history_length: usize,
}

/// Stateless layout calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    /// Compute the full geometry for the given inputs
    pub fn compute(input: &LayoutInput) -> Geometry {
        let sensor_count = input.sensor_count.max(1);
        let height = input.height.max(input.min_height);
        let chart_rows = Self::chart_rows(sensor_count);
        let row_height = Self::row_height(height, sensor_count, input.min_height);

        Geometry {
            width: input.width,
            height: (row_height as usize * chart_rows).min(u16::MAX as usize) as u16,
            chart_rows,
            row_height,
            bar_width: Self::bar_width(input.width, sensor_count),
            history_window_offset: Self::history_window_offset(input.width, input.history_length),
        }
    }

    /// Number of grid rows: the summary row plus one per pair of the
    /// remaining sensors, rounding up for a trailing odd sensor
    pub fn chart_rows(sensor_count: usize) -> usize {
        (sensor_count.max(1) + 2) / 2
    }

    /// Height of each chart row.
    ///
    /// If the terminal cannot give every row [`MIN_ROW_HEIGHT`] lines the
    /// height is raised to that floor first, so charts never collapse.
    pub fn row_height(term_height: u16, sensor_count: usize, min_height: u16) -> u16 {
        let rows = Self::chart_rows(sensor_count);
        let floor = MIN_ROW_HEIGHT as usize * rows;
        let mut height = term_height.max(min_height) as usize;
        if height < floor {
            height = floor;
        }
        let row_height = height / rows;
        row_height.clamp(MIN_ROW_HEIGHT as usize, u16::MAX as usize) as u16
    }

    /// Width of each bar in the summary chart, which spans half the
    /// terminal. Terminals too narrow for a bar still get width 1.
    pub fn bar_width(term_width: u16, sensor_count: usize) -> u16 {
        let n = sensor_count.max(1) as i64;
        let width = ((term_width as i64 / 2) - BAR_CHART_CHROME - n) / n;
        width.clamp(1, u16::MAX as i64) as u16
    }

    /// Index of the first history point that fits in a history chart.
    ///
    /// Always satisfies `0 <= offset < history_length`, so at least the
    /// newest point stays visible even on very narrow terminals.
    pub fn history_window_offset(term_width: u16, history_length: usize) -> usize {
        if history_length == 0 {
            return 0;
        }
        let fits = (term_width as i64 / 2) * 2 - HISTORY_CHART_CHROME;
        let visible = fits.clamp(1, history_length as i64) as usize;
        history_length - visible
    }

    /// Grid arrangement for the given number of sensors
    pub fn arrangement(sensor_count: usize) -> Vec<ChartRow> {
        if sensor_count == 0 {
            return Vec::new();
        }

        let mut rows = vec![ChartRow::Summary { sensor: 0 }];
        let mut i = 1;
        while i < sensor_count {
            if sensor_count - i > 1 {
                rows.push(ChartRow::Pair {
                    left: i,
                    right: i + 1,
                });
            } else {
                rows.push(ChartRow::Single { sensor: i });
            }
            i += 2;
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(width: u16, height: u16, sensor_count: usize) -> LayoutInput {
        LayoutInput {
            width,
            height,
            sensor_count,
            min_height: 0,
            history_length: 500,
        }
    }

    #[test]
    fn test_chart_rows_match_arrangement() {
        for n in 1..=12 {
            assert_eq!(
                LayoutEngine::chart_rows(n),
                LayoutEngine::arrangement(n).len(),
                "sensor count {}",
                n
            );
        }
    }

    #[test]
    fn test_arrangement_pairs_and_trailing_single() {
        assert_eq!(
            LayoutEngine::arrangement(4),
            vec![
                ChartRow::Summary { sensor: 0 },
                ChartRow::Pair { left: 1, right: 2 },
                ChartRow::Single { sensor: 3 },
            ]
        );
        assert_eq!(
            LayoutEngine::arrangement(5),
            vec![
                ChartRow::Summary { sensor: 0 },
                ChartRow::Pair { left: 1, right: 2 },
                ChartRow::Pair { left: 3, right: 4 },
            ]
        );
        assert_eq!(
            LayoutEngine::arrangement(1),
            vec![ChartRow::Summary { sensor: 0 }]
        );
        assert!(LayoutEngine::arrangement(0).is_empty());
    }

    #[test]
    fn test_row_height_divides_terminal() {
        // 5 sensors -> 3 rows
        assert_eq!(LayoutEngine::row_height(48, 5, 0), 16);
        assert_eq!(LayoutEngine::row_height(50, 5, 0), 16);
    }

    #[test]
    fn test_row_height_floor() {
        for n in 1..=16 {
            for h in 0..20 {
                assert!(LayoutEngine::row_height(h, n, 0) >= MIN_ROW_HEIGHT);
            }
        }
    }

    #[test]
    fn test_row_height_monotonic_in_height() {
        for n in 1..=8 {
            let mut last = 0;
            for h in 0..200 {
                let rh = LayoutEngine::row_height(h, n, 0);
                assert!(rh >= last);
                last = rh;
            }
        }
    }

    #[test]
    fn test_min_height_raises_rows() {
        assert_eq!(LayoutEngine::row_height(24, 5, 36), 12);
        assert_eq!(LayoutEngine::row_height(60, 5, 36), 20);
    }

    #[test]
    fn test_bar_width() {
        // (120 / 2 - 3 - 5) / 5 = 10
        assert_eq!(LayoutEngine::bar_width(120, 5), 10);
        assert_eq!(LayoutEngine::bar_width(80, 4), 8);
    }

    #[test]
    fn test_bar_width_never_below_one() {
        for n in 1..=32 {
            for w in 0..40 {
                assert!(LayoutEngine::bar_width(w, n) >= 1);
            }
        }
    }

    #[test]
    fn test_history_offset_bounds_and_monotonicity() {
        for len in [1usize, 2, 50, 200, 500] {
            let mut last = 0;
            for w in (0..=400u16).rev() {
                let offset = LayoutEngine::history_window_offset(w, len);
                assert!(offset < len);
                assert!(offset >= last, "offset shrank as width decreased");
                last = offset;
            }
        }
    }

    #[test]
    fn test_history_offset_values() {
        // 120 columns show 102 points
        assert_eq!(LayoutEngine::history_window_offset(120, 500), 398);
        assert_eq!(LayoutEngine::history_window_offset(121, 500), 398);
        // 40 columns show 22 points
        assert_eq!(LayoutEngine::history_window_offset(40, 500), 478);
        // Wide terminal shows everything
        assert_eq!(LayoutEngine::history_window_offset(2000, 500), 0);
        // Narrower than the chart chrome still shows the newest point
        assert_eq!(LayoutEngine::history_window_offset(10, 500), 499);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let i = input(133, 41, 7);
        assert_eq!(LayoutEngine::compute(&i), LayoutEngine::compute(&i));
    }

    #[test]
    fn test_compute_full_geometry() {
        let geometry = LayoutEngine::compute(&input(120, 48, 5));
        assert_eq!(geometry.chart_rows, 3);
        assert_eq!(geometry.row_height, 16);
        assert_eq!(geometry.height, 48);
        assert_eq!(geometry.bar_width, 10);
        assert_eq!(geometry.history_window_offset, 398);
    }

    #[test]
    fn test_compute_tiny_terminal() {
        let geometry = LayoutEngine::compute(&input(1, 1, 9));
        assert!(geometry.row_height >= 1);
        assert!(geometry.bar_width >= 1);
        assert_eq!(geometry.history_window_offset, 499);
    }
}
