//! Colors and styles shared by the dashboard widgets.

use ratatui::style::{Color, Modifier, Style};
use thermtop_core::Severity;

/// Bar color for the current overall severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Nominal => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

pub fn summary_title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn history_title_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub fn history_line_style() -> Style {
    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
}

pub fn bar_label_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub fn bar_value_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Labels of sensors showing a held-over reading
pub fn stale_style() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}
