//! Bounded population history.
//!
//! Every sample is a full recount of a grid snapshot, never an incremental
//! update. The series is a sliding window: once it holds `max_len` samples
//! the oldest one is dropped for each new one.

use crate::error::{EngineError, Result};
use rockpaper_data::{GridSnapshot, Sample, Species};
use std::collections::VecDeque;

pub const DEFAULT_MAX_HISTORY: usize = 600;

#[derive(Debug, Clone)]
pub struct HistoryTracker {
    series: VecDeque<Sample>,
    max_len: usize,
    time_step: u64,
    epoch: Option<u64>,
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self {
            series: VecDeque::with_capacity(DEFAULT_MAX_HISTORY),
            max_len: DEFAULT_MAX_HISTORY,
            time_step: 0,
            epoch: None,
        }
    }
}

impl HistoryTracker {
    /// Tracker keeping at most `max_len` samples.
    pub fn new(max_len: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(EngineError::InvalidHistoryCapacity);
        }
        Ok(Self {
            series: VecDeque::with_capacity(max_len),
            max_len,
            time_step: 0,
            epoch: None,
        })
    }

    /// Clears the series and restarts the time counter at 0.
    pub fn reset(&mut self) {
        self.series.clear();
        self.time_step = 0;
        self.epoch = None;
        tracing::debug!("History reset");
    }

    /// Recounts `grid` and appends the result at the current time step.
    ///
    /// A snapshot from a different engine epoch than the previous sample
    /// means the grid was reinitialized, so the series restarts first. This
    /// only happens on the next sample: callers that reinitialize the engine
    /// should call [`reset`](Self::reset) themselves, otherwise `series()`
    /// and friends keep returning the old epoch's samples until then.
    pub fn sample(&mut self, grid: &GridSnapshot) -> &Sample {
        if self.epoch.is_some_and(|e| e != grid.epoch) {
            tracing::debug!(
                from = ?self.epoch,
                to = grid.epoch,
                "Grid reinitialized, restarting history"
            );
            self.reset();
        }
        self.epoch = Some(grid.epoch);

        let sample = Sample {
            time_step: self.time_step,
            counts: grid.count_species(),
            cell_count: grid.cell_count(),
        };
        self.time_step += 1;
        self.series.push_back(sample);
        if self.series.len() > self.max_len {
            if let Some(evicted) = self.series.pop_front() {
                tracing::trace!(time_step = evicted.time_step, "Evicted oldest sample");
            }
        }
        &self.series[self.series.len() - 1]
    }

    /// The retained samples, oldest first.
    #[must_use]
    pub fn series(&self) -> &VecDeque<Sample> {
        &self.series
    }

    /// Per-sample species shares in percent, normalized by each sample's own
    /// cell count.
    #[must_use]
    pub fn percentages(&self) -> Vec<(u64, [f64; 3])> {
        self.series
            .iter()
            .map(|s| (s.time_step, s.percentages()))
            .collect()
    }

    /// One trace of absolute counts for `species`.
    #[must_use]
    pub fn species_series(&self, species: Species) -> Vec<(u64, usize)> {
        self.series
            .iter()
            .map(|s| (s.time_step, s.counts.get(species)))
            .collect()
    }

    /// Upper bound of the absolute-count axis: the largest cell count in the
    /// window.
    #[must_use]
    pub fn axis_max(&self) -> usize {
        self.series.iter().map(|s| s.cell_count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.series.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Time step the next sample will receive.
    #[must_use]
    pub fn time_step(&self) -> u64 {
        self.time_step
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}
