//! History line chart for a single sensor

use crate::theme;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;
use std::cell::RefCell;
use thermtop_core::{HistoryWindow, Sensor};

// Thread-local buffer for chart points to avoid allocation per frame.
// Pre-sized for a full default history.
thread_local! {
    static POINTS_BUFFER: RefCell<Vec<(f64, f64)>> = RefCell::new(Vec::with_capacity(512));
}

/// Chart title, e.g. " Core 0, 30 sec avg (°C) "
pub fn history_title(label: &str, average_period: usize) -> String {
    format!(" {}, {} sec avg (°C) ", label, average_period)
}

/// Y-axis bounds that keep a flat line visible
pub fn y_bounds(window: &HistoryWindow<'_>) -> [f64; 2] {
    let (lo, hi) = window
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let lo = lo.floor();
    let hi = hi.ceil();
    if hi - lo < 1.0 {
        [lo - 1.0, hi + 1.0]
    } else {
        [lo, hi]
    }
}

/// Render one sensor's visible history into `area`
pub fn render_history_chart(
    frame: &mut Frame,
    sensor: &Sensor,
    window: &HistoryWindow<'_>,
    average_period: usize,
    area: Rect,
) {
    let [lo, hi] = y_bounds(window);
    let mid = (lo + hi) / 2.0;
    let x_max = window.len().saturating_sub(1).max(1) as f64;

    POINTS_BUFFER.with(|buffer| {
        let mut points = buffer.borrow_mut();
        points.clear();
        points.extend(window.iter().enumerate().map(|(i, v)| (i as f64, v)));

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::history_line_style())
            .data(points.as_slice());

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default().borders(Borders::ALL).title(Span::styled(
                    history_title(&sensor.label, average_period),
                    theme::history_title_style(),
                )),
            )
            .x_axis(Axis::default().bounds([0.0, x_max]))
            .y_axis(Axis::default().bounds([lo, hi]).labels(vec![
                Span::raw(format!("{:.0}", lo)),
                Span::raw(format!("{:.0}", mid)),
                Span::raw(format!("{:.0}", hi)),
            ]));

        frame.render_widget(chart, area);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermtop_core::HistorySeries;

    #[test]
    fn test_history_title() {
        assert_eq!(history_title("Core 0", 30), " Core 0, 30 sec avg (°C) ");
    }

    #[test]
    fn test_flat_history_gets_padding() {
        let series = HistorySeries::new(10);
        assert_eq!(y_bounds(&series.window(0)), [-1.0, 1.0]);
    }

    #[test]
    fn test_bounds_cover_values() {
        let mut series = HistorySeries::new(4);
        for v in [41.2, 47.8, 44.0, 45.5] {
            series.push(v);
        }
        assert_eq!(y_bounds(&series.window(0)), [41.0, 48.0]);
        assert_eq!(y_bounds(&series.window(2)), [44.0, 46.0]);
    }
}
