//! Terminal ownership and the ratatui-backed renderer.

use crate::dashboard::draw_dashboard;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Once;
use thermtop_core::{RenderError, Renderer, ViewModel};

static PANIC_HOOK: Once = Once::new();

/// Raw mode plus alternate screen, restored on drop.
///
/// A panic hook installed on first entry restores the terminal before the
/// default hook prints, so panic messages stay readable.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = reset_terminal();
                previous(info);
            }));
        });

        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        log::debug!("Terminal session entered");
        Ok(Self { active: true })
    }

    /// Leave the alternate screen and raw mode. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        reset_terminal()?;
        log::debug!("Terminal session restored");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

fn reset_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// [`Renderer`] drawing the dashboard through any ratatui backend
pub struct BackendRenderer<B: Backend> {
    terminal: Terminal<B>,
    session: Option<TerminalSession>,
}

/// Renderer for the real terminal
pub type TerminalRenderer = BackendRenderer<CrosstermBackend<Stdout>>;

impl TerminalRenderer {
    /// Take over stdout: raw mode, alternate screen, hidden cursor
    pub fn stdout() -> io::Result<Self> {
        let session = TerminalSession::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            session: Some(session),
        })
    }
}

impl<B: Backend> BackendRenderer<B> {
    /// Wrap an existing backend without touching terminal modes
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            session: None,
        })
    }

    /// Current terminal size as (columns, rows)
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Renderer for BackendRenderer<B> {
    fn render(&mut self, view: &ViewModel<'_>) -> Result<(), RenderError> {
        self.terminal
            .draw(|frame| draw_dashboard(frame, view))
            .map(|_| ())
            .map_err(|e| RenderError(format!("draw failed: {}", e)))
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        if let Some(mut session) = self.session.take() {
            session
                .restore()
                .map_err(|e| RenderError(format!("terminal restore failed: {}", e)))?;
        }
        Ok(())
    }
}
