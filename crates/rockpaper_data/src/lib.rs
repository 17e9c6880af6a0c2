//! Plain data shared between the rockpaper engine and its consumers.

pub mod data;

pub use data::population::PopulationCounts;
pub use data::snapshot::{GridSnapshot, Sample};
pub use data::species::Species;
