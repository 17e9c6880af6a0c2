use crate::model::{PopulationCounts, Sample, Species};
use serde::{Deserialize, Serialize};

/// Driver output, one JSON object per line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum SimEvent {
    Reset {
        size: usize,
        epoch: u64,
        steps_per_tick: usize,
    },
    Sample {
        time_step: u64,
        counts: PopulationCounts,
        percentages: [f64; 3],
        cell_count: usize,
    },
    Monoculture {
        time_step: u64,
        species: Species,
    },
}

impl From<&Sample> for SimEvent {
    fn from(sample: &Sample) -> Self {
        SimEvent::Sample {
            time_step: sample.time_step,
            counts: sample.counts,
            percentages: sample.percentages(),
            cell_count: sample.cell_count,
        }
    }
}

impl SimEvent {
    pub fn to_json_line(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
