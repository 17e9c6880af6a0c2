//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Every section has defaults, so a partial file is enough.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags of the driver binary (override the file)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! size = 100
//!
//! [simulation]
//! steps_per_tick = 1000
//! start_running = true
//!
//! [history]
//! max_len = 600
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GRID_SIZE: usize = 100;
pub const DEFAULT_STEPS_PER_TICK: usize = 1000;
pub const MAX_GRID_SIZE: usize = 2000;

/// Grid dimensions. The grid is always square.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
        }
    }
}

impl GridConfig {
    /// Turns a raw user-provided size into a usable one.
    ///
    /// Zero or missing input falls back to the default; oversized input is
    /// capped at [`MAX_GRID_SIZE`].
    #[must_use]
    pub fn clamped(raw: Option<usize>) -> Self {
        let size = match raw {
            Some(0) | None => DEFAULT_GRID_SIZE,
            Some(n) => n.min(MAX_GRID_SIZE),
        };
        Self { size }
    }
}

/// Driver cadence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Interactions applied per tick, between two history samples.
    pub steps_per_tick: usize,
    pub start_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps_per_tick: DEFAULT_STEPS_PER_TICK,
            start_running: true,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn clamped_steps(raw: Option<usize>) -> usize {
        match raw {
            Some(0) | None => DEFAULT_STEPS_PER_TICK,
            Some(n) => n,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    pub max_len: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_len: crate::history::DEFAULT_MAX_HISTORY,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Grid size must be in `1..=MAX_GRID_SIZE`
    /// - Steps per tick must be positive
    /// - History must retain at least one sample
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.grid.size > 0, "Grid size must be positive");
        anyhow::ensure!(
            self.grid.size <= MAX_GRID_SIZE,
            "Grid size too large (max {})",
            MAX_GRID_SIZE
        );
        anyhow::ensure!(
            self.simulation.steps_per_tick > 0,
            "Steps per tick must be positive"
        );
        anyhow::ensure!(
            self.history.max_len > 0,
            "History length must be positive"
        );
        anyhow::ensure!(
            !self.logging.level.trim().is_empty(),
            "Log level must not be empty"
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.history).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.size, 100);
        assert_eq!(config.simulation.steps_per_tick, 1000);
        assert_eq!(config.history.max_len, 600);
    }

    #[test]
    fn test_invalid_grid_size() {
        let config = AppConfig {
            grid: GridConfig { size: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            grid: GridConfig {
                size: MAX_GRID_SIZE + 1,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_steps_per_tick() {
        let config = AppConfig {
            simulation: SimulationConfig {
                steps_per_tick: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[grid]\nsize = 42\n").expect("parse");
        assert_eq!(config.grid.size, 42);
        assert_eq!(config.history.max_len, 600);
        assert!(config.simulation.start_running);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(AppConfig::from_toml("[history]\nmax_len = 0\n").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("definitely/not/here.toml").expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[simulation]\nsteps_per_tick = 5\n").expect("write");
        let config = AppConfig::load(&path).expect("load");
        assert_eq!(config.simulation.steps_per_tick, 5);
    }

    #[test]
    fn test_clamped_inputs() {
        assert_eq!(GridConfig::clamped(None).size, DEFAULT_GRID_SIZE);
        assert_eq!(GridConfig::clamped(Some(0)).size, DEFAULT_GRID_SIZE);
        assert_eq!(GridConfig::clamped(Some(7)).size, 7);
        assert_eq!(GridConfig::clamped(Some(usize::MAX)).size, MAX_GRID_SIZE);
        assert_eq!(SimulationConfig::clamped_steps(Some(0)), 1000);
        assert_eq!(SimulationConfig::clamped_steps(Some(3)), 3);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = AppConfig::default();
        let config2 = AppConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        let mut config3 = AppConfig::default();
        config3.grid.size = 10;
        assert_ne!(config1.fingerprint(), config3.fingerprint());
    }
}
