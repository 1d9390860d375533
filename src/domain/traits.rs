use crate::domain::graph::{Graph, SccResult};

/// Folds a title into the key used for case-insensitive lookup.
pub trait TitleFolder: Send + Sync {
    fn fold(&self, title: &str) -> String;

    /// Looser key, consulted only after `fold` finds nothing.
    fn fold_loose(&self, title: &str) -> String {
        self.fold(title)
    }
}

pub trait SccDetector: Send + Sync {
    /// Short stable name used in events and timings.
    fn name(&self) -> &'static str;

    fn compute_scc(&self, graph: &Graph) -> SccResult;
}
