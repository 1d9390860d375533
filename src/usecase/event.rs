use crate::usecase::stats::AnalysisStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphBuilt {
        nodes: usize,
        edges: usize,
        dropped_edges: usize,
        duplicate_edges: usize,
    },

    SccComputed {
        algorithm: String,
        components: usize,
        non_trivial_components: usize,
        cyclic_components: usize,
        largest_component: usize,
        micros: u64,
    },

    PartitionsCompared {
        components: usize,
        agree: bool,
    },

    IndexBuilt {
        indexed_components: usize,
        indexed_nodes: usize,
    },

    Finished {
        stats: AnalysisStats,
    },
}
