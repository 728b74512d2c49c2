//! Startup sequence and the dashboard event loop

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::input;
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures_util::{Stream, StreamExt};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thermtop_core::{
    ControllerState, DashboardController, DashboardEvent, DashboardSettings, Renderer,
    SampleReader,
};
use thermtop_render::TerminalRenderer;
use thermtop_sources::DEFAULT_SYSFS_ROOT;
use tokio::time::{interval, MissedTickBehavior};

/// Resolve configuration from the config file plus command line overrides
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    cli.apply(&mut config);
    Ok(config)
}

/// Validate settings, discover sensors, then take over the terminal and
/// run until quit or a fatal error.
///
/// Everything that can fail without a terminal fails before the terminal
/// is acquired.
pub async fn run_dashboard(config: AppConfig) -> Result<()> {
    let settings = DashboardSettings::try_from(&config.dashboard)
        .context("Invalid configuration")?;

    let root = config
        .sysfs_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSFS_ROOT));
    let (sensors, reader) = thermtop_sources::open(&root)?;
    log::info!("Found {} sensors under {}", sensors.len(), root.display());

    let renderer = TerminalRenderer::stdout().context("Failed to initialize terminal")?;
    let size = renderer.size().context("Failed to query terminal size")?;
    let tick = settings.tick_interval;

    let mut controller = DashboardController::new(sensors, settings, reader, renderer, size);
    controller.start()?;
    run_loop(&mut controller, tick, EventStream::new()).await
}

/// Merge the sampling timer with terminal input until the controller
/// terminates.
///
/// Missed ticks are delayed, not bursted: a slow sensor read pushes the
/// next sample back instead of triggering catch-up reads.
pub async fn run_loop<R, D, S>(
    controller: &mut DashboardController<R, D>,
    tick: Duration,
    mut events: S,
) -> Result<()>
where
    R: SampleReader,
    D: Renderer,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick completes immediately; the first sample is one period out
    ticker.tick().await;

    let mut input_open = true;
    loop {
        let event = tokio::select! {
            _ = ticker.tick() => DashboardEvent::Tick,
            next = events.next(), if input_open => match next {
                Some(Ok(raw)) => match input::map_event(&raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => return Err(e).context("Failed to read terminal input"),
                None => {
                    log::warn!("Terminal input closed");
                    input_open = false;
                    continue;
                }
            },
        };

        let started = Instant::now();
        let state = controller.handle(event)?;
        log::trace!("Handled {:?} in {:?}", event, started.elapsed());

        if state == ControllerState::Terminating {
            return Ok(());
        }
    }
}
