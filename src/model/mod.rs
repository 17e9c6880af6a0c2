pub use rockpaper_core::{GridEngine, HistoryTracker, Outcome};
pub use rockpaper_data::{GridSnapshot, PopulationCounts, Sample, Species};

pub mod config {
    pub use rockpaper_core::config::*;
}
pub mod error {
    pub use rockpaper_core::error::*;
}
pub mod grid {
    pub use rockpaper_core::grid::*;
}
pub mod history {
    pub use rockpaper_core::history::*;
}
pub mod metrics {
    pub use rockpaper_core::metrics::*;
}
pub mod rules {
    pub use rockpaper_core::rules::*;
}
