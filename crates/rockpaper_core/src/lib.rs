//! # Rockpaper Core
//!
//! The simulation engine for a spatial rock-paper-scissors process on a
//! toroidal grid.
//!
//! This crate contains:
//! - The cyclic win rule and von Neumann neighborhood
//! - The grid engine, which owns the N×N species grid and applies one
//!   stochastic interaction per step
//! - The history tracker, which recounts populations and keeps a bounded
//!   time series for charting
//! - Configuration loading and structured logging
//!
//! ## Example
//!
//! ```
//! use rockpaper_core::{GridEngine, HistoryTracker};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut engine = GridEngine::with_rng(ChaCha8Rng::seed_from_u64(7));
//! engine.initialize(10).unwrap();
//! engine.run_steps(1000).unwrap();
//!
//! let mut history = HistoryTracker::default();
//! let sample = history.sample(&engine.read_grid().unwrap());
//! assert_eq!(sample.counts.total(), 100);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Engine error types
pub mod error;
/// Grid engine: state, stochastic update, reinitialization
pub mod grid;
/// Bounded population history
pub mod history;
/// Counters and logging bootstrap
pub mod metrics;
/// Win rule and neighborhood
pub mod rules;

pub use error::{EngineError, Result};
pub use grid::{GridEngine, Outcome};
pub use history::{HistoryTracker, DEFAULT_MAX_HISTORY};
pub use metrics::{init_logging, Metrics};
pub use rockpaper_data::{GridSnapshot, PopulationCounts, Sample, Species};
pub use rules::{wins_over, Direction};
