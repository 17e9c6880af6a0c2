use super::species::Species;
use serde::{Deserialize, Serialize};

/// Number of cells held by each species, indexed by [`Species::index`].
///
/// Always produced by a full recount of a grid, so the counts sum to the
/// cell count of the grid they were taken from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationCounts {
    pub counts: [usize; 3],
}

impl PopulationCounts {
    #[must_use]
    pub fn tally<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Species>,
    {
        let mut counts = [0usize; 3];
        for s in cells {
            counts[s.index()] += 1;
        }
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, species: Species) -> usize {
        self.counts[species.index()]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of each species in percent of `cell_count`.
    ///
    /// A zero `cell_count` yields all zeros rather than NaN.
    #[must_use]
    pub fn percentages(&self, cell_count: usize) -> [f64; 3] {
        if cell_count == 0 {
            return [0.0; 3];
        }
        let total = cell_count as f64;
        self.counts.map(|c| c as f64 / total * 100.0)
    }

    /// Species with the most cells; ties resolve to the lower index.
    #[must_use]
    pub fn dominant(&self) -> Option<Species> {
        if self.total() == 0 {
            return None;
        }
        let mut best = Species::Rock;
        for s in Species::ALL {
            if self.get(s) > self.get(best) {
                best = s;
            }
        }
        Some(best)
    }

    /// True when a single species occupies every counted cell.
    #[must_use]
    pub fn is_monoculture(&self) -> bool {
        let total = self.total();
        total > 0 && self.counts.iter().any(|&c| c == total)
    }

    #[must_use]
    pub fn extinct(&self) -> Vec<Species> {
        Species::ALL
            .into_iter()
            .filter(|s| self.get(*s) == 0)
            .collect()
    }
}
