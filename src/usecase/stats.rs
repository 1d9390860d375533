use serde::Serialize;

/// Diagnostics of one graph build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub nodes: usize,
    pub edges: usize,
    pub dropped_edges: usize,
    pub duplicate_edges: usize,
    pub self_loops: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisStats {
    pub nodes: usize,
    pub edges: usize,
    pub dropped_edges: usize,
    pub duplicate_edges: usize,
    pub self_loops: usize,
    pub components: usize,
    pub non_trivial_components: usize,
    pub largest_component: usize,
    pub indexed_nodes: usize,
    pub tarjan_micros: u64,
    pub kosaraju_micros: u64,
}
