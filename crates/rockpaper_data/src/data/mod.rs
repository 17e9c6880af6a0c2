//! Core data structures for the cyclic dominance simulation.

pub mod population;
pub mod snapshot;
pub mod species;
