//! Grid engine: owns the N×N species grid and evolves it one stochastic
//! interaction at a time.
//!
//! The engine is either uninitialized or ready. `initialize` (and its alias
//! `resize_and_reinitialize`) moves it to ready, discarding any previous grid;
//! every other operation requires a ready engine and reports
//! [`EngineError::Uninitialized`] otherwise.
//!
//! Each (re)initialization bumps the engine epoch. Snapshots carry the epoch,
//! which is how the history tracker learns that its series must restart.

use crate::error::{EngineError, Result};
use crate::rules::{wins_over, Direction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rockpaper_data::{GridSnapshot, Species};
use std::sync::Arc;

/// Result of a single interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The defender at `(x, y)` was overwritten.
    Converted {
        x: usize,
        y: usize,
        from: Species,
        to: Species,
    },
    Unchanged,
}

impl Outcome {
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

struct Board {
    size: usize,
    cells: Vec<Species>,
    initial: Arc<[Species]>,
}

impl Board {
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        (y % self.size) * self.size + (x % self.size)
    }
}

/// Authoritative grid state plus the randomness source that drives it.
pub struct GridEngine<R: Rng = ChaCha8Rng> {
    board: Option<Board>,
    rng: R,
    epoch: u64,
    steps_taken: u64,
}

impl GridEngine<ChaCha8Rng> {
    /// Engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl Default for GridEngine<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GridEngine<R> {
    /// Engine drawing all randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: None,
            rng,
            epoch: 0,
            steps_taken: 0,
        }
    }

    fn checked_cell_count(size: usize) -> Result<usize> {
        if size < 1 {
            return Err(EngineError::InvalidSize(size));
        }
        size.checked_mul(size).ok_or(EngineError::InvalidSize(size))
    }

    /// Allocates a `size`×`size` grid filled uniformly at random and records
    /// it as the initial grid.
    pub fn initialize(&mut self, size: usize) -> Result<()> {
        let cell_count = Self::checked_cell_count(size)?;
        let cells: Vec<Species> = (0..cell_count)
            .map(|_| Species::ALL[self.rng.gen_range(0..Species::ALL.len())])
            .collect();
        self.install(size, cells);
        Ok(())
    }

    /// Same as [`initialize`](Self::initialize); nothing carries over from
    /// the previous grid.
    pub fn resize_and_reinitialize(&mut self, new_size: usize) -> Result<()> {
        self.initialize(new_size)
    }

    /// Reinitializes with explicit row-major content instead of random draws.
    pub fn load_cells(&mut self, size: usize, cells: Vec<Species>) -> Result<()> {
        let expected = Self::checked_cell_count(size)?;
        if cells.len() != expected {
            return Err(EngineError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        self.install(size, cells);
        Ok(())
    }

    fn install(&mut self, size: usize, cells: Vec<Species>) {
        let initial: Arc<[Species]> = Arc::from(cells.as_slice());
        self.board = Some(Board {
            size,
            cells,
            initial,
        });
        self.epoch += 1;
        self.steps_taken = 0;
        tracing::info!(size = size, epoch = self.epoch, "Grid initialized");
    }

    fn board(&self) -> Result<&Board> {
        self.board.as_ref().ok_or(EngineError::Uninitialized)
    }

    fn board_mut(&mut self) -> Result<&mut Board> {
        self.board.as_mut().ok_or(EngineError::Uninitialized)
    }

    /// One stochastic interaction: a uniformly random attacker cell, one of
    /// its four neighbors chosen uniformly, then the win rule.
    pub fn step(&mut self) -> Result<Outcome> {
        let size = self.size()?;
        let x = self.rng.gen_range(0..size);
        let y = self.rng.gen_range(0..size);
        let direction = Direction::random(&mut self.rng);
        self.interact(x, y, direction)
    }

    /// Resolves an interaction between the attacker at `(x, y)` and its
    /// neighbor in `direction`. Coordinates wrap.
    ///
    /// At most the defender cell changes, and only when the attacker wins.
    pub fn interact(&mut self, x: usize, y: usize, direction: Direction) -> Result<Outcome> {
        let board = self.board_mut()?;
        let (x, y) = (x % board.size, y % board.size);
        let (nx, ny) = direction.neighbor(x, y, board.size);
        let attacker = board.cells[board.index(x, y)];
        let defender_idx = board.index(nx, ny);
        let defender = board.cells[defender_idx];

        let outcome = if wins_over(attacker, defender) {
            board.cells[defender_idx] = attacker;
            Outcome::Converted {
                x: nx,
                y: ny,
                from: defender,
                to: attacker,
            }
        } else {
            Outcome::Unchanged
        };
        self.steps_taken += 1;
        Ok(outcome)
    }

    /// Calls [`step`](Self::step) `count` times in order and returns how many
    /// of them converted a cell.
    pub fn run_steps(&mut self, count: usize) -> Result<usize> {
        self.board()?;
        let mut conversions = 0;
        for _ in 0..count {
            if self.step()?.is_conversion() {
                conversions += 1;
            }
        }
        tracing::debug!(
            steps = count,
            conversions = conversions,
            epoch = self.epoch,
            "Step batch complete"
        );
        Ok(conversions)
    }

    /// Copy of the live grid; later steps do not affect it.
    pub fn read_grid(&self) -> Result<GridSnapshot> {
        let board = self.board()?;
        Ok(GridSnapshot::new(
            board.size,
            self.epoch,
            Arc::from(board.cells.as_slice()),
        ))
    }

    /// The grid as it was right after the last (re)initialization.
    pub fn initial_grid(&self) -> Result<GridSnapshot> {
        let board = self.board()?;
        Ok(GridSnapshot::new(
            board.size,
            self.epoch,
            Arc::clone(&board.initial),
        ))
    }

    /// Puts the initial grid back. Counts as a reinitialization.
    pub fn restore_initial(&mut self) -> Result<()> {
        let board = self.board()?;
        let size = board.size;
        let cells = board.initial.to_vec();
        self.install(size, cells);
        Ok(())
    }

    /// Number of cells whose species differs from the initial grid.
    pub fn changed_since_initial(&self) -> Result<usize> {
        let board = self.board()?;
        Ok(board
            .cells
            .iter()
            .zip(board.initial.iter())
            .filter(|(now, then)| now != then)
            .count())
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Species> {
        let board = self.board()?;
        Ok(board.cells[board.index(x, y)])
    }

    /// Overwrites one cell. Coordinates wrap; the initial grid is untouched.
    pub fn set_cell(&mut self, x: usize, y: usize, species: Species) -> Result<()> {
        let board = self.board_mut()?;
        let idx = board.index(x, y);
        board.cells[idx] = species;
        Ok(())
    }

    /// Overwrites every cell with `species`.
    pub fn fill(&mut self, species: Species) -> Result<()> {
        let board = self.board_mut()?;
        board.cells.fill(species);
        Ok(())
    }

    pub fn size(&self) -> Result<usize> {
        Ok(self.board()?.size)
    }

    pub fn cell_count(&self) -> Result<usize> {
        Ok(self.board()?.cells.len())
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.board.is_some()
    }

    /// Number of (re)initializations so far; 0 before the first.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Interactions resolved since the last (re)initialization.
    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }
}
