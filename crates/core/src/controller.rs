//! Dashboard controller: the single driver of all state transitions.
//!
//! The controller owns the [`DashboardState`] and reacts to one
//! [`DashboardEvent`] at a time. Sampling ticks may produce an averaging
//! tick; it goes into a one-slot mailbox that is drained before
//! [`DashboardController::handle`] returns, so the averaging cadence is
//! always processed between two sampling ticks and never drifts.

use crate::aggregation::{AggregationEngine, AveragingTick};
use crate::error::{DashboardError, SensorReadError};
use crate::layout::{ChartRow, Geometry, LayoutEngine, LayoutInput};
use crate::renderer::{Renderer, ViewModel};
use crate::sample::{self, SampleReader};
use crate::sensor_set::SensorSet;
use crate::settings::DashboardSettings;
use log::{debug, info, trace, warn};
use thermtop_types::{DashboardEvent, ReadErrorPolicy, SampleSet, Severity};

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Running,
    Terminating,
}

/// All process-wide dashboard state, owned by the controller
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub sensors: SensorSet,
    pub samples: SampleSet,
    pub severity: Severity,
    /// Per-sensor flag set when a reading was held over from a prior tick
    pub stale: Vec<bool>,
    pub engine: AggregationEngine,
    pub geometry: Geometry,
    pub arrangement: Vec<ChartRow>,
    /// Last known terminal size (columns, rows)
    pub terminal: (u16, u16),
    /// Manually adjusted layout height, if manual height is enabled
    pub height_bound: Option<u16>,
}

/// Drives sampling, aggregation, layout and rendering
pub struct DashboardController<R, D> {
    settings: DashboardSettings,
    state: DashboardState,
    reader: R,
    renderer: D,
    lifecycle: ControllerState,
    /// Averaging tick waiting to be processed; holds at most one
    pending: Option<AveragingTick>,
    /// Last successful reading per sensor, used by the stale policy
    last_good: Vec<Option<i32>>,
}

impl<R: SampleReader, D: Renderer> DashboardController<R, D> {
    /// Create a controller for a non-empty sensor set and the current
    /// terminal size.
    pub fn new(
        sensors: SensorSet,
        settings: DashboardSettings,
        reader: R,
        renderer: D,
        terminal: (u16, u16),
    ) -> Self {
        let count = sensors.len();
        let height_bound = settings
            .manual_height
            .then(|| terminal.1.max(settings.minimum_height));
        let geometry = Self::layout(&settings, terminal, height_bound, count);

        let state = DashboardState {
            samples: SampleSet::zeroed(count),
            severity: Severity::Nominal,
            stale: vec![false; count],
            engine: AggregationEngine::new(count, settings.average_period, settings.history_length),
            geometry,
            arrangement: LayoutEngine::arrangement(count),
            sensors,
            terminal,
            height_bound,
        };

        Self {
            settings,
            state,
            reader,
            renderer,
            lifecycle: ControllerState::Running,
            pending: None,
            last_good: vec![None; count],
        }
    }

    /// Draw the initial frame
    pub fn start(&mut self) -> Result<(), DashboardError> {
        info!(
            "Dashboard running: {} sensors, {}s average, {} history points",
            self.state.sensors.len(),
            self.settings.average_period,
            self.settings.history_length
        );
        self.render()
    }

    /// Process one event and every transition it triggers.
    ///
    /// Returns the lifecycle state after the event. Errors are fatal for
    /// the run; the caller is expected to tear down and exit.
    pub fn handle(&mut self, event: DashboardEvent) -> Result<ControllerState, DashboardError> {
        if self.lifecycle == ControllerState::Terminating {
            trace!("Ignoring {:?} after quit", event);
            return Ok(self.lifecycle);
        }

        match event {
            DashboardEvent::Tick => self.on_sampling_tick()?,
            DashboardEvent::Resize { width, height } => self.on_resize(width, height)?,
            DashboardEvent::Grow => self.on_adjust_height(true)?,
            DashboardEvent::Shrink => self.on_adjust_height(false)?,
            DashboardEvent::Quit => {
                info!("Quit requested");
                self.lifecycle = ControllerState::Terminating;
                self.renderer.finish()?;
                return Ok(self.lifecycle);
            }
        }

        while let Some(tick) = self.pending.take() {
            self.on_averaging_tick(tick)?;
        }

        Ok(self.lifecycle)
    }

    fn on_sampling_tick(&mut self) -> Result<(), DashboardError> {
        let (samples, stale) = self.read_samples()?;

        self.state.severity = sample::classify(&self.state.sensors, &samples);
        if let Some(tick) = self.state.engine.accumulate(&samples) {
            debug_assert!(self.pending.is_none(), "averaging tick already pending");
            self.pending = Some(tick);
        }
        self.state.samples = samples;
        self.state.stale = stale;

        self.render()
    }

    fn on_averaging_tick(&mut self, tick: AveragingTick) -> Result<(), DashboardError> {
        self.state.engine.flush(tick);
        self.render()
    }

    fn on_resize(&mut self, width: u16, height: u16) -> Result<(), DashboardError> {
        debug!("Terminal resized to {}x{}", width, height);
        self.state.terminal = (width, height);
        self.relayout();
        self.render()
    }

    fn on_adjust_height(&mut self, grow: bool) -> Result<(), DashboardError> {
        let Some(bound) = self.state.height_bound else {
            debug!("Manual height disabled, ignoring height adjustment");
            return Ok(());
        };

        // One line per chart row keeps every row the same height
        let step = self.state.geometry.chart_rows.min(u16::MAX as usize) as u16;
        let adjusted = if grow {
            bound.saturating_add(step)
        } else {
            bound.saturating_sub(step).max(self.settings.minimum_height)
        };
        if adjusted == bound {
            return Ok(());
        }

        debug!("Layout height {} -> {}", bound, adjusted);
        self.state.height_bound = Some(adjusted);
        self.relayout();
        self.render()
    }

    /// Read every sensor according to the configured failure policy. Nothing
    /// in the dashboard state changes until the whole tick has been read.
    fn read_samples(&mut self) -> Result<(SampleSet, Vec<bool>), SensorReadError> {
        let count = self.state.sensors.len();
        match self.settings.read_error_policy {
            ReadErrorPolicy::Abort => {
                let samples = self.reader.read_all(&self.state.sensors)?;
                for (slot, value) in self.last_good.iter_mut().zip(samples.iter()) {
                    *slot = Some(value);
                }
                Ok((samples, vec![false; count]))
            }
            ReadErrorPolicy::MarkStale => {
                let results = sample::read_each(&mut self.reader, &self.state.sensors);
                let mut values = Vec::with_capacity(count);
                let mut stale = Vec::with_capacity(count);

                for (index, result) in results.into_iter().enumerate() {
                    match (result, self.last_good[index]) {
                        (Ok(value), _) => {
                            values.push(value);
                            stale.push(false);
                        }
                        (Err(e), Some(held)) => {
                            warn!("{}; holding last reading {}°C", e, held);
                            values.push(held);
                            stale.push(true);
                        }
                        (Err(e), None) => return Err(e),
                    }
                }

                for (slot, (value, is_stale)) in
                    self.last_good.iter_mut().zip(values.iter().zip(&stale))
                {
                    if !is_stale {
                        *slot = Some(*value);
                    }
                }
                Ok((SampleSet::from(values), stale))
            }
        }
    }

    fn relayout(&mut self) {
        self.state.geometry = Self::layout(
            &self.settings,
            self.state.terminal,
            self.state.height_bound,
            self.state.sensors.len(),
        );
    }

    fn layout(
        settings: &DashboardSettings,
        terminal: (u16, u16),
        height_bound: Option<u16>,
        sensor_count: usize,
    ) -> Geometry {
        let (height, min_height) = match height_bound {
            Some(bound) => (bound, settings.minimum_height),
            None => (terminal.1, 0),
        };
        LayoutEngine::compute(&LayoutInput {
            width: terminal.0,
            height,
            sensor_count,
            min_height,
            history_length: settings.history_length,
        })
    }

    /// Build the view model for the current state
    pub fn view(&self) -> ViewModel<'_> {
        build_view(&self.settings, &self.state)
    }

    fn render(&mut self) -> Result<(), DashboardError> {
        let view = build_view(&self.settings, &self.state);
        self.renderer.render(&view)?;
        Ok(())
    }

    pub fn lifecycle(&self) -> ControllerState {
        self.lifecycle
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    /// Take the renderer back, e.g. to restore the terminal explicitly
    pub fn into_renderer(self) -> D {
        self.renderer
    }
}

fn build_view<'a>(settings: &DashboardSettings, state: &'a DashboardState) -> ViewModel<'a> {
    let offset = state.geometry.history_window_offset;
    ViewModel {
        sensors: &state.sensors,
        samples: &state.samples,
        severity: state.severity,
        stale: &state.stale,
        history: (0..state.sensors.len())
            .filter_map(|i| state.engine.window(i, offset))
            .collect(),
        geometry: state.geometry,
        arrangement: &state.arrangement,
        average_period: settings.average_period,
    }
}
