//! Semantic events consumed by the dashboard controller.

/// A decoded event; raw key codes never reach the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The 1-second sampling cadence fired
    Tick,
    /// Leave the dashboard
    Quit,
    /// Terminal was resized to the given columns and rows
    Resize { width: u16, height: u16 },
    /// Make every chart row one line taller
    Grow,
    /// Make every chart row one line shorter
    Shrink,
}
