//! Summary bar chart: one bar per sensor with its current reading

use crate::theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;
use thermtop_core::constants::BAR_GAP;
use thermtop_core::ViewModel;

pub const SUMMARY_TITLE: &str = " CPU Temperatures (°C), Q to quit";

/// Render the summary bar chart into `area`
pub fn render_bar_chart(frame: &mut Frame, view: &ViewModel<'_>, area: Rect) {
    let color = theme::severity_color(view.severity);

    let bars: Vec<Bar> = view
        .sensors
        .iter()
        .zip(view.samples.iter())
        .map(|(sensor, value)| {
            let label_style = if view.is_stale(sensor.index) {
                theme::stale_style()
            } else {
                theme::bar_label_style()
            };
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(Span::styled(sensor.label.clone(), label_style)))
                .style(ratatui::style::Style::default().fg(color))
                .value_style(theme::bar_value_style().bg(color))
        })
        .collect();

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(SUMMARY_TITLE, theme::summary_title_style())),
        )
        .bar_width(view.geometry.bar_width)
        .bar_gap(BAR_GAP)
        .data(BarGroup::default().bars(&bars));

    let max = view.bar_max();
    if max > 0 {
        chart = chart.max(max as u64);
    }

    frame.render_widget(chart, area);
}
