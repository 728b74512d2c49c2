//! Full-frame dashboard: places chart rows on the grid computed by the
//! layout engine.

use crate::bar_display::render_bar_chart;
use crate::graph_display::render_history_chart;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use thermtop_core::{ChartRow, ViewModel};

/// Draw every chart row of `view` into the frame.
///
/// Rows are stacked at multiples of the computed row height. When a manual
/// height bound or a tiny terminal makes the grid taller than the frame,
/// rows below the bottom edge are clipped.
pub fn draw_dashboard(frame: &mut Frame, view: &ViewModel<'_>) {
    let area = frame.area();
    let row_height = view.geometry.row_height;

    for (i, row) in view.arrangement.iter().enumerate() {
        let Some(rect) = row_rect(area, i, row_height) else {
            break;
        };
        let [left, right] = split_columns(rect);

        match *row {
            ChartRow::Summary { sensor } => {
                render_bar_chart(frame, view, left);
                draw_history(frame, view, sensor, right);
            }
            ChartRow::Pair { left: l, right: r } => {
                draw_history(frame, view, l, left);
                draw_history(frame, view, r, right);
            }
            ChartRow::Single { sensor } => {
                draw_history(frame, view, sensor, left);
            }
        }
    }
}

fn draw_history(frame: &mut Frame, view: &ViewModel<'_>, sensor: usize, area: Rect) {
    let (Some(s), Some(window)) = (view.sensors.get(sensor), view.history.get(sensor)) else {
        log::warn!("No history for sensor {}", sensor);
        return;
    };
    render_history_chart(frame, s, window, view.average_period, area);
}

/// Area of row `index`, clipped to `area`; `None` once rows fall off the
/// bottom
pub fn row_rect(area: Rect, index: usize, row_height: u16) -> Option<Rect> {
    let offset = u32::from(row_height) * index as u32;
    if row_height == 0 || offset >= u32::from(area.height) {
        return None;
    }
    let y = area.y + offset as u16;
    let height = row_height.min(area.bottom() - y);
    Some(Rect::new(area.x, y, area.width, height))
}

fn split_columns(rect: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stack_and_clip() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(row_rect(area, 0, 12), Some(Rect::new(0, 0, 80, 12)));
        assert_eq!(row_rect(area, 1, 12), Some(Rect::new(0, 12, 80, 12)));
        // Third row only partly fits
        assert_eq!(row_rect(area, 2, 12), Some(Rect::new(0, 24, 80, 6)));
        assert_eq!(row_rect(area, 3, 12), None);
    }

    #[test]
    fn test_zero_height_rows_are_skipped() {
        assert_eq!(row_rect(Rect::new(0, 0, 80, 30), 0, 0), None);
    }

    #[test]
    fn test_columns_split_evenly() {
        let [l, r] = split_columns(Rect::new(0, 0, 80, 10));
        assert_eq!(l.width, 40);
        assert_eq!(r.x, 40);
        assert_eq!(r.width, 40);
    }
}
