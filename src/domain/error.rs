use crate::domain::model::{Namespace, PageId};
use thiserror::Error;

/// Fatal input corruption detected while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphBuildError {
    #[error("duplicate node key (namespace {namespace}, title {title:?}) on pages {first_id} and {second_id}")]
    DuplicateNodeKey {
        namespace: Namespace,
        title: String,
        first_id: PageId,
        second_id: PageId,
    },

    #[error("duplicate page id {id}")]
    DuplicatePageId { id: PageId },
}

/// Recoverable outcome of a title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("empty search term")]
    EmptyQuery,

    #[error("no article titled {title:?}")]
    TitleNotFound { title: String },

    #[error("article {title:?} exists but is not part of any strongly connected group")]
    NoNonTrivialComponent { title: String },
}

/// Internal-consistency faults of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(
        "tarjan and kosaraju partitions disagree at node {node} ({title:?}): \
         tarjan found {tarjan_components} components, kosaraju found {kosaraju_components}"
    )]
    PartitionMismatch {
        node: usize,
        title: String,
        tarjan_components: usize,
        kosaraju_components: usize,
    },

    #[error("scc worker for {algorithm} failed: {reason}")]
    Worker {
        algorithm: &'static str,
        reason: String,
    },
}
