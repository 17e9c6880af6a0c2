//! Error types for the engine.
//!
//! Every variant is a precondition violation: the operation that returns it
//! has not touched any state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid side length below 1
    #[error("Invalid grid size {0}: size must be at least 1")]
    InvalidSize(usize),

    /// Step, read or edit attempted before `initialize`
    #[error("Grid engine is not initialized")]
    Uninitialized,

    /// Explicit grid content whose length is not `size * size`
    #[error("Cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// History capacity of zero
    #[error("Invalid history capacity: must hold at least one sample")]
    InvalidHistoryCapacity,
}

pub type Result<T> = std::result::Result<T, EngineError>;
