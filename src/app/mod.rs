pub mod events;
pub mod state;

pub use events::SimEvent;
pub use state::Simulation;

use anyhow::Result;

impl Simulation {
    /// Runs `ticks` ticks back to back, handing every event to `emit`.
    ///
    /// Stops early once one species holds the whole grid: nothing can
    /// change after that.
    pub fn run_for<F>(&mut self, ticks: u64, mut emit: F) -> Result<u64>
    where
        F: FnMut(&SimEvent) -> Result<()>,
    {
        emit(&self.reset_event())?;
        let mut done = 0;
        while done < ticks {
            let Some(sample) = self.tick()? else {
                break;
            };
            done += 1;
            emit(&SimEvent::from(&sample))?;
            if sample.counts.is_monoculture() {
                if let Some(species) = sample.counts.dominant() {
                    tracing::info!(
                        time_step = sample.time_step,
                        species = %species,
                        "Monoculture reached"
                    );
                    emit(&SimEvent::Monoculture {
                        time_step: sample.time_step,
                        species,
                    })?;
                }
                break;
            }
        }
        Ok(done)
    }
}
