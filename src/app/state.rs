use anyhow::Result;
use std::time::Instant;

use crate::app::events::SimEvent;
use crate::model::config::{AppConfig, GridConfig, SimulationConfig};
use crate::model::metrics::Metrics;
use crate::model::{GridEngine, GridSnapshot, HistoryTracker, Sample};

/// Driver owning one engine and its history.
///
/// Holds the run/pause state and the number of steps applied per tick; the
/// engine and tracker never see either.
pub struct Simulation {
    pub engine: GridEngine,
    pub history: HistoryTracker,
    pub running: bool,
    pub steps_per_tick: usize,
    pub config: AppConfig,
    pub metrics: Metrics,
}

impl Simulation {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = GridEngine::new();
        engine.initialize(config.grid.size)?;
        let history = HistoryTracker::new(config.history.max_len)?;

        Ok(Self {
            engine,
            history,
            running: config.simulation.start_running,
            steps_per_tick: config.simulation.steps_per_tick,
            config,
            metrics: Metrics::new(),
        })
    }

    /// Advances one tick if running. Returns the new sample, if any.
    pub fn tick(&mut self) -> Result<Option<Sample>> {
        if !self.running {
            return Ok(None);
        }
        self.advance().map(Some)
    }

    /// Advances exactly one tick while paused; a no-op while running.
    pub fn step_once(&mut self) -> Result<Option<Sample>> {
        if self.running {
            return Ok(None);
        }
        self.advance().map(Some)
    }

    fn advance(&mut self) -> Result<Sample> {
        let started = Instant::now();
        let conversions = self.engine.run_steps(self.steps_per_tick)?;
        let snapshot = self.engine.read_grid()?;
        let sample = *self.history.sample(&snapshot);
        self.metrics
            .record_batch(self.steps_per_tick, conversions, started.elapsed());
        Ok(sample)
    }

    /// Changes the cadence between ticks without touching the grid or the
    /// history. Zero falls back to the default, as in `reset`.
    pub fn set_steps_per_tick(&mut self, steps_per_tick: Option<usize>) -> usize {
        let steps = SimulationConfig::clamped_steps(steps_per_tick);
        self.steps_per_tick = steps;
        self.config.simulation.steps_per_tick = steps;
        tracing::debug!(steps_per_tick = steps, "Steps per tick changed");
        steps
    }

    /// Flips run/pause and returns the new running state.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        tracing::debug!(running = self.running, "Run state toggled");
        self.running
    }

    /// Reinitializes the grid with fresh parameters.
    ///
    /// Raw inputs are clamped the way the controls accept them: missing or
    /// zero values fall back to the defaults.
    pub fn reset(
        &mut self,
        size: Option<usize>,
        steps_per_tick: Option<usize>,
    ) -> Result<SimEvent> {
        let grid = GridConfig::clamped(size);
        let steps = SimulationConfig::clamped_steps(steps_per_tick);
        self.engine.resize_and_reinitialize(grid.size)?;
        self.history.reset();
        self.metrics.reset();
        self.config.grid = grid;
        self.config.simulation.steps_per_tick = steps;
        self.steps_per_tick = steps;
        Ok(self.reset_event())
    }

    /// Replays from the same starting board.
    pub fn restart(&mut self) -> Result<SimEvent> {
        self.engine.restore_initial()?;
        self.history.reset();
        self.metrics.reset();
        Ok(self.reset_event())
    }

    #[must_use]
    pub fn reset_event(&self) -> SimEvent {
        SimEvent::Reset {
            size: self.config.grid.size,
            epoch: self.engine.epoch(),
            steps_per_tick: self.steps_per_tick,
        }
    }

    pub fn snapshot(&self) -> Result<GridSnapshot> {
        Ok(self.engine.read_grid()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.grid.size = 10;
        config.simulation.steps_per_tick = 50;
        config.history.max_len = 5;
        config
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = small_config();
        config.grid.size = 0;
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_tick_samples_when_running() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let sample = sim.tick().unwrap().expect("running sim samples");
        assert_eq!(sample.time_step, 0);
        assert_eq!(sample.counts.total(), 100);
        assert_eq!(sim.metrics.steps(), 50);
        assert_eq!(sim.engine.steps_taken(), 50);
    }

    #[test]
    fn test_step_once_only_when_paused() {
        let mut sim = Simulation::new(small_config()).unwrap();
        assert!(sim.step_once().unwrap().is_none());
        assert!(!sim.toggle_running());
        assert!(sim.tick().unwrap().is_none());
        assert!(sim.step_once().unwrap().is_some());
        assert_eq!(sim.history.len(), 1);
    }

    #[test]
    fn test_history_window_is_capped() {
        let mut sim = Simulation::new(small_config()).unwrap();
        for _ in 0..12 {
            sim.tick().unwrap();
        }
        assert_eq!(sim.history.len(), 5);
        assert_eq!(sim.history.series().front().map(|s| s.time_step), Some(7));
    }

    #[test]
    fn test_reset_clamps_and_clears_history() {
        let mut sim = Simulation::new(small_config()).unwrap();
        sim.tick().unwrap();
        let event = sim.reset(Some(0), Some(7)).unwrap();
        assert_eq!(
            event,
            SimEvent::Reset {
                size: 100,
                epoch: 2,
                steps_per_tick: 7
            }
        );
        assert!(sim.history.is_empty());
        assert_eq!(sim.engine.size().unwrap(), 100);
        assert_eq!(sim.history.time_step(), 0);
    }

    #[test]
    fn test_set_steps_per_tick_keeps_history() {
        let mut sim = Simulation::new(small_config()).unwrap();
        sim.tick().unwrap();
        let epoch = sim.engine.epoch();

        assert_eq!(sim.set_steps_per_tick(Some(20)), 20);
        sim.tick().unwrap();
        assert_eq!(sim.history.len(), 2);
        assert_eq!(sim.engine.epoch(), epoch);
        assert_eq!(sim.metrics.steps(), 70);
        assert_eq!(sim.config.simulation.steps_per_tick, 20);

        assert_eq!(sim.set_steps_per_tick(Some(0)), 1000);
        assert_eq!(sim.set_steps_per_tick(None), 1000);
    }

    #[test]
    fn test_restart_replays_initial_board() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let initial = sim.engine.initial_grid().unwrap();
        for _ in 0..3 {
            sim.tick().unwrap();
        }
        sim.restart().unwrap();
        assert_eq!(sim.snapshot().unwrap().cells, initial.cells);
        assert!(sim.history.is_empty());
    }
}
