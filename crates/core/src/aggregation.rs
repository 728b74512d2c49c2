//! Dual-cadence aggregation of sensor readings.
//!
//! Every sampling tick adds the current readings to a per-sensor running
//! sum. Once `average_period` ticks have been accumulated the engine hands
//! out an [`AveragingTick`]; flushing it appends one average per sensor to
//! that sensor's history and resets the sums. The token can only be minted
//! by [`AggregationEngine::accumulate`], so an averaging flush can never
//! happen on its own schedule.

use crate::history::{HistorySeries, HistoryWindow};
use log::{debug, trace};
use thermtop_types::SampleSet;

/// Proof that an averaging period has just completed
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an averaging tick must be flushed before the next sampling tick"]
pub struct AveragingTick {
    _private: (),
}

/// Owns per-sensor running sums and history series
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    average_period: usize,
    /// Sampling ticks since the last flush
    rotate: usize,
    sums: Vec<f64>,
    history: Vec<HistorySeries>,
}

impl AggregationEngine {
    /// `average_period` and `history_length` are validated upstream and
    /// must both be at least 1.
    pub fn new(sensor_count: usize, average_period: usize, history_length: usize) -> Self {
        debug_assert!(average_period > 0);
        Self {
            average_period: average_period.max(1),
            rotate: 0,
            sums: vec![0.0; sensor_count],
            history: (0..sensor_count)
                .map(|_| HistorySeries::new(history_length))
                .collect(),
        }
    }

    /// Fold one sampling tick into the running sums.
    ///
    /// Returns the averaging tick when this sample completes a period.
    pub fn accumulate(&mut self, samples: &SampleSet) -> Option<AveragingTick> {
        debug_assert_eq!(samples.len(), self.sums.len());
        for (sum, value) in self.sums.iter_mut().zip(samples.iter()) {
            *sum += value as f64;
        }
        self.rotate += 1;
        trace!("Accumulated tick {}/{}", self.rotate, self.average_period);

        if self.rotate == self.average_period {
            Some(AveragingTick { _private: () })
        } else {
            None
        }
    }

    /// Append one average per sensor to history and reset the period
    pub fn flush(&mut self, _tick: AveragingTick) {
        let period = self.average_period as f64;
        for (sum, series) in self.sums.iter_mut().zip(self.history.iter_mut()) {
            series.push(*sum / period);
            *sum = 0.0;
        }
        self.rotate = 0;
        debug!(
            "Flushed {} sensor averages over {} ticks",
            self.history.len(),
            self.average_period
        );
    }

    /// Sampling ticks accumulated in the current period
    pub fn rotate(&self) -> usize {
        self.rotate
    }

    pub fn average_period(&self) -> usize {
        self.average_period
    }

    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    pub fn history(&self, sensor: usize) -> Option<&HistorySeries> {
        self.history.get(sensor)
    }

    /// Visible tail of one sensor's history starting at `offset`
    pub fn window(&self, sensor: usize, offset: usize) -> Option<HistoryWindow<'_>> {
        self.history.get(sensor).map(|series| series.window(offset))
    }

    pub fn history_length(&self) -> usize {
        self.history.first().map(HistorySeries::len).unwrap_or(0)
    }
}
