use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rockpaper_lib::model::{GridEngine, Species};

/// Builds engines with a seeded RNG and optional explicit layouts.
#[allow(dead_code)]
pub struct EngineBuilder {
    seed: u64,
    size: usize,
    rows: Option<Vec<Vec<u8>>>,
    fill: Option<Species>,
}

#[allow(dead_code)]
impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            seed: 42,
            size: 10,
            rows: None,
            fill: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Rows of species indices, `rows[y][x]`.
    pub fn with_rows(mut self, rows: &[&[u8]]) -> Self {
        self.size = rows.len();
        self.rows = Some(rows.iter().map(|r| r.to_vec()).collect());
        self
    }

    pub fn filled_with(mut self, species: Species) -> Self {
        self.fill = Some(species);
        self
    }

    pub fn build(self) -> GridEngine<ChaCha8Rng> {
        let mut engine = GridEngine::with_rng(ChaCha8Rng::seed_from_u64(self.seed));
        match self.rows {
            Some(rows) => {
                let cells = rows
                    .iter()
                    .flatten()
                    .map(|&i| Species::from_index(i as usize).expect("species index"))
                    .collect();
                engine
                    .load_cells(self.size, cells)
                    .expect("Failed to load layout in test builder");
            }
            None => engine
                .initialize(self.size)
                .expect("Failed to initialize engine in test builder"),
        }
        if let Some(species) = self.fill {
            engine.fill(species).expect("fill");
        }
        engine
    }
}
