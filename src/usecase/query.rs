use crate::domain::error::LookupError;
use crate::domain::graph::Graph;
use crate::domain::traits::TitleFolder;
use crate::usecase::membership::MembershipIndex;
use std::collections::HashMap;
use std::sync::Arc;

/// Title -> co-member titles, read-only over an immutable graph and index.
pub struct QueryService {
    graph: Arc<Graph>,
    index: MembershipIndex,
    folder: Box<dyn TitleFolder>,
    by_folded_title: HashMap<String, usize>,
    by_loose_title: HashMap<String, usize>,
}

impl QueryService {
    pub fn new(graph: Arc<Graph>, index: MembershipIndex, folder: Box<dyn TitleFolder>) -> Self {
        let mut by_folded_title = HashMap::with_capacity(graph.node_count());
        let mut by_loose_title = HashMap::with_capacity(graph.node_count());
        // Pages are in ascending id order, so the first insert is the lowest id.
        for (idx, page) in graph.pages().iter().enumerate() {
            by_folded_title
                .entry(folder.fold(&page.title))
                .or_insert(idx);
            by_loose_title
                .entry(folder.fold_loose(&page.title))
                .or_insert(idx);
        }

        Self {
            graph,
            index,
            folder,
            by_folded_title,
            by_loose_title,
        }
    }

    /// Node index a title resolves to, if any. A case-insensitive exact match
    /// always beats the loose key.
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.by_folded_title
            .get(&self.folder.fold(title))
            .or_else(|| self.by_loose_title.get(&self.folder.fold_loose(title)))
            .copied()
    }

    /// Titles of every member of the title's non-trivial component, the queried
    /// page included, in ascending page-id order.
    pub fn lookup(&self, title: &str) -> Result<Vec<String>, LookupError> {
        if title.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let node = self.resolve(title).ok_or_else(|| LookupError::TitleNotFound {
            title: title.to_string(),
        })?;

        let members =
            self.index
                .component_of(node)
                .ok_or_else(|| LookupError::NoNonTrivialComponent {
                    title: self.graph.page(node).title.clone(),
                })?;

        Ok(members
            .iter()
            .map(|&v| self.graph.page(v).title.clone())
            .collect())
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn index(&self) -> &MembershipIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NodeRecord, RawEdge};
    use crate::domain::traits::SccDetector;
    use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
    use crate::infrastructure::title_folder::DefaultTitleFolder;
    use crate::usecase::build_graph::build_graph;

    fn service(nodes: Vec<NodeRecord>, edges: Vec<RawEdge>) -> QueryService {
        let (graph, _) = build_graph(nodes, edges).expect("build");
        let partition = KosarajuSccDetector.compute_scc(&graph);
        let index = MembershipIndex::build(&partition);
        QueryService::new(Arc::new(graph), index, Box::new(DefaultTitleFolder))
    }

    #[test]
    fn lookup_is_case_insensitive_and_underscore_tolerant() {
        let svc = service(
            vec![
                NodeRecord::new(1, 0, "Graph_theory"),
                NodeRecord::new(2, 0, "Vertex"),
            ],
            vec![
                RawEdge::new(1, 0, 0, "Vertex"),
                RawEdge::new(2, 0, 0, "Graph_theory"),
            ],
        );

        let expected = vec!["Graph_theory".to_string(), "Vertex".to_string()];
        assert_eq!(svc.lookup("graph theory"), Ok(expected.clone()));
        assert_eq!(svc.lookup("VERTEX"), Ok(expected));
    }

    #[test]
    fn folded_title_collision_resolves_to_lowest_page_id() {
        let svc = service(
            vec![
                NodeRecord::new(9, 0, "apple"),
                NodeRecord::new(4, 0, "Apple"),
                NodeRecord::new(5, 0, "Pear"),
            ],
            vec![
                RawEdge::new(4, 0, 0, "Pear"),
                RawEdge::new(5, 0, 0, "Apple"),
            ],
        );

        assert_eq!(svc.resolve("APPLE"), svc.graph().index_of(4));
        assert_eq!(
            svc.lookup("aPPle"),
            Ok(vec!["Apple".to_string(), "Pear".to_string()])
        );
    }

    #[test]
    fn exact_title_wins_over_underscore_variant() {
        let svc = service(
            vec![
                NodeRecord::new(2, 0, "A_B"),
                NodeRecord::new(5, 0, "A B"),
                NodeRecord::new(6, 0, "X"),
            ],
            vec![RawEdge::new(5, 0, 0, "X"), RawEdge::new(6, 0, 0, "A B")],
        );

        assert_eq!(
            svc.lookup("A B"),
            Ok(vec!["A B".to_string(), "X".to_string()])
        );
        assert_eq!(
            svc.lookup("a_b"),
            Err(LookupError::NoNonTrivialComponent {
                title: "A_B".to_string()
            })
        );
    }

    #[test]
    fn surrounding_whitespace_still_resolves() {
        let svc = service(
            vec![NodeRecord::new(1, 0, "Alpha"), NodeRecord::new(2, 0, "Beta")],
            vec![RawEdge::new(1, 0, 0, "Beta"), RawEdge::new(2, 0, 0, "Alpha")],
        );

        let expected = vec!["Alpha".to_string(), "Beta".to_string()];
        assert_eq!(svc.lookup("alpha  "), Ok(expected.clone()));
        assert_eq!(svc.lookup("  BETA\t"), Ok(expected));
    }

    #[test]
    fn blank_query_is_reported_separately() {
        let svc = service(vec![NodeRecord::new(1, 0, "A")], Vec::new());
        assert_eq!(svc.lookup("   "), Err(LookupError::EmptyQuery));
    }

    #[test]
    fn service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryService>();
    }
}
