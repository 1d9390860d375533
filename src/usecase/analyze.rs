use crate::domain::error::AnalysisError;
use crate::domain::graph::Graph;
use crate::domain::model::{NodeRecord, RawEdge};
use crate::domain::traits::{SccDetector, TitleFolder};
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::scc_tarjan::TarjanSccDetector;
use crate::usecase::benchmark::{benchmark, AlgorithmSummary};
use crate::usecase::build_graph::build_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::membership::MembershipIndex;
use crate::usecase::query::QueryService;
use crate::usecase::stats::{AnalysisStats, BuildReport};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Run the two detectors on separate blocking threads.
    pub concurrent: bool,
    /// Benchmark rounds per detector; values below 1 are treated as 1.
    pub rounds: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            concurrent: false,
            rounds: 1,
        }
    }
}

/// Everything one run produces. Both partitions are kept for cross-validation;
/// the membership index is built from Kosaraju's.
#[derive(Debug)]
pub struct Analysis {
    pub graph: Arc<Graph>,
    pub report: BuildReport,
    pub tarjan: AlgorithmSummary,
    pub kosaraju: AlgorithmSummary,
    pub index: MembershipIndex,
    pub stats: AnalysisStats,
}

impl Analysis {
    pub fn into_query_service(self, folder: Box<dyn TitleFolder>) -> QueryService {
        QueryService::new(self.graph, self.index, folder)
    }
}

pub async fn analyze_link_graph(
    nodes: Vec<NodeRecord>,
    edges: Vec<RawEdge>,
    options: AnalysisOptions,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<Analysis> {
    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let (graph, report) = build_graph(nodes, edges)?;
    let graph = Arc::new(graph);
    emit(
        &sink,
        AppEvent::GraphBuilt {
            nodes: report.nodes,
            edges: report.edges,
            dropped_edges: report.dropped_edges,
            duplicate_edges: report.duplicate_edges,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let (tarjan, kosaraju) = if options.concurrent {
        run_concurrently(Arc::clone(&graph), options.rounds).await?
    } else {
        (
            run_one(&TarjanSccDetector, &graph, options.rounds)?,
            run_one(&KosarajuSccDetector, &graph, options.rounds)?,
        )
    };
    for summary in [&tarjan, &kosaraju] {
        emit(&sink, scc_event(summary)).await;
    }
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "cross_validate".into(),
        },
    )
    .await;
    let divergence = tarjan.result.divergence(&kosaraju.result);
    emit(
        &sink,
        AppEvent::PartitionsCompared {
            components: kosaraju.result.component_count(),
            agree: divergence.is_none(),
        },
    )
    .await;
    if let Some(node) = divergence {
        return Err(AnalysisError::PartitionMismatch {
            node,
            title: graph
                .pages()
                .get(node)
                .map(|p| p.title.clone())
                .unwrap_or_default(),
            tarjan_components: tarjan.result.component_count(),
            kosaraju_components: kosaraju.result.component_count(),
        }
        .into());
    }
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "cross_validate".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "membership_index".into(),
        },
    )
    .await;
    let index = MembershipIndex::build(&kosaraju.result);
    emit(
        &sink,
        AppEvent::IndexBuilt {
            indexed_components: index.len(),
            indexed_nodes: index.indexed_nodes(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "membership_index".into(),
        },
    )
    .await;

    let stats = AnalysisStats {
        nodes: report.nodes,
        edges: report.edges,
        dropped_edges: report.dropped_edges,
        duplicate_edges: report.duplicate_edges,
        self_loops: report.self_loops,
        components: kosaraju.result.component_count(),
        non_trivial_components: kosaraju.result.non_trivial_count(),
        largest_component: kosaraju.result.largest_component_len(),
        indexed_nodes: index.indexed_nodes(),
        tarjan_micros: micros(&tarjan),
        kosaraju_micros: micros(&kosaraju),
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    Ok(Analysis {
        graph,
        report,
        tarjan,
        kosaraju,
        index,
        stats,
    })
}

fn run_one(detector: &dyn SccDetector, graph: &Graph, rounds: usize) -> Result<AlgorithmSummary> {
    benchmark(&[detector], graph, rounds)
        .summaries
        .pop()
        .ok_or_else(|| {
            AnalysisError::Worker {
                algorithm: detector.name(),
                reason: "no timing recorded".to_string(),
            }
            .into()
        })
}

async fn run_concurrently(
    graph: Arc<Graph>,
    rounds: usize,
) -> Result<(AlgorithmSummary, AlgorithmSummary)> {
    let g = Arc::clone(&graph);
    let tarjan = tokio::task::spawn_blocking(move || run_one(&TarjanSccDetector, &g, rounds));
    let g = Arc::clone(&graph);
    let kosaraju = tokio::task::spawn_blocking(move || run_one(&KosarajuSccDetector, &g, rounds));

    let tarjan = tarjan.await.map_err(|e| AnalysisError::Worker {
        algorithm: "tarjan",
        reason: e.to_string(),
    })??;
    let kosaraju = kosaraju.await.map_err(|e| AnalysisError::Worker {
        algorithm: "kosaraju",
        reason: e.to_string(),
    })??;

    Ok((tarjan, kosaraju))
}

fn micros(summary: &AlgorithmSummary) -> u64 {
    u64::try_from(summary.min.as_micros()).unwrap_or(u64::MAX)
}

fn scc_event(summary: &AlgorithmSummary) -> AppEvent {
    AppEvent::SccComputed {
        algorithm: summary.algorithm.to_string(),
        components: summary.result.component_count(),
        non_trivial_components: summary.result.non_trivial_count(),
        cyclic_components: summary.result.cyclic_count(),
        largest_component: summary.result.largest_component_len(),
        micros: micros(summary),
    }
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
