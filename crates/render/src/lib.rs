//! thermtop-render: ratatui rendering for the thermtop dashboard.
//!
//! Widgets take a [`thermtop_core::ViewModel`] and draw into a frame;
//! [`BackendRenderer`] plugs them into the controller's `Renderer` seam.

pub mod bar_display;
pub mod dashboard;
pub mod graph_display;
pub mod terminal;
pub mod theme;

pub use bar_display::{render_bar_chart, SUMMARY_TITLE};
pub use dashboard::draw_dashboard;
pub use graph_display::{history_title, render_history_chart};
pub use terminal::{BackendRenderer, TerminalRenderer, TerminalSession};
