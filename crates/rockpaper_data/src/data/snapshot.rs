use super::population::PopulationCounts;
use super::species::Species;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Read-only view of an N×N grid, row-major (`index = y * size + x`).
///
/// Cloning is cheap; the cells are shared and cannot be mutated through the
/// snapshot. `epoch` identifies the (re)initialization the grid belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub size: usize,
    pub epoch: u64,
    pub cells: Arc<[Species]>,
}

impl GridSnapshot {
    #[must_use]
    pub fn new(size: usize, epoch: u64, cells: Arc<[Species]>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, epoch, cells }
    }

    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `(x, y)`; both coordinates wrap around the torus.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Species {
        let n = self.size as i64;
        let wx = x.rem_euclid(n) as usize;
        let wy = y.rem_euclid(n) as usize;
        self.cells[wy * self.size + wx]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Species]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Full recount of every cell.
    #[must_use]
    pub fn count_species(&self) -> PopulationCounts {
        PopulationCounts::tally(self.cells.iter().copied())
    }
}

/// One point of the population time series.
///
/// `cell_count` is the normalization basis at the time the sample was taken,
/// so percentages stay meaningful if the grid is later resized.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_step: u64,
    pub counts: PopulationCounts,
    pub cell_count: usize,
}

impl Sample {
    #[must_use]
    pub fn percentages(&self) -> [f64; 3] {
        self.counts.percentages(self.cell_count)
    }
}
