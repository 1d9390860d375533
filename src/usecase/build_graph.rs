use crate::domain::error::GraphBuildError;
use crate::domain::graph::Graph;
use crate::domain::model::{NodeRecord, Page, PageKey, RawEdge};
use crate::usecase::stats::BuildReport;
use std::collections::{HashMap, HashSet};

/// Builds the page graph.
///
/// Node records are ordered by page id. An edge survives only if its source id
/// exists with the stated namespace and its target `(namespace, title)` names a
/// page; anything else is dropped and counted. Repeated `(from, to)` pairs
/// collapse to the first insertion.
pub fn build_graph<I>(
    nodes: Vec<NodeRecord>,
    edges: I,
) -> Result<(Graph, BuildReport), GraphBuildError>
where
    I: IntoIterator<Item = RawEdge>,
{
    let mut nodes = nodes;
    nodes.sort_by_key(|n| n.id);

    if let Some(w) = nodes.windows(2).find(|w| w[0].id == w[1].id) {
        return Err(GraphBuildError::DuplicatePageId { id: w[0].id });
    }

    let mut by_key: HashMap<PageKey, usize> = HashMap::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        if let Some(&first) = by_key.get(&node.key()) {
            return Err(GraphBuildError::DuplicateNodeKey {
                namespace: node.namespace,
                title: node.title.clone(),
                first_id: nodes[first].id,
                second_id: node.id,
            });
        }
        by_key.insert(node.key(), idx);
    }

    let pages: Vec<Page> = nodes.into_iter().map(Page::from).collect();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); pages.len()];
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut report = BuildReport {
        nodes: pages.len(),
        ..BuildReport::default()
    };

    for edge in edges {
        let Some(from) = resolve_source(&pages, &edge) else {
            report.dropped_edges += 1;
            continue;
        };
        let key = PageKey {
            namespace: edge.to_namespace,
            title: edge.to_title,
        };
        let Some(&to) = by_key.get(&key) else {
            report.dropped_edges += 1;
            continue;
        };

        if !seen.insert((from, to)) {
            report.duplicate_edges += 1;
            continue;
        }
        if from == to {
            report.self_loops += 1;
        }
        adjacency[from].push(to);
        report.edges += 1;
    }

    Ok((Graph::from_parts(pages, adjacency), report))
}

fn resolve_source(pages: &[Page], edge: &RawEdge) -> Option<usize> {
    let idx = pages.binary_search_by_key(&edge.from_id, |p| p.id).ok()?;
    (pages[idx].namespace == edge.from_namespace).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<NodeRecord> {
        vec![
            NodeRecord::new(30, 0, "C"),
            NodeRecord::new(10, 0, "A"),
            NodeRecord::new(20, 0, "B"),
        ]
    }

    #[test]
    fn nodes_are_indexed_by_ascending_page_id() {
        let (g, report) = build_graph(abc(), Vec::new()).expect("build");

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.page(0).title, "A");
        assert_eq!(g.page(2).title, "C");
        assert_eq!(g.index_of(20), Some(1));
        assert_eq!(report.nodes, 3);
        assert_eq!(report.edges, 0);
    }

    #[test]
    fn edges_keep_first_insertion_order() {
        let edges = vec![
            RawEdge::new(10, 0, 0, "C"),
            RawEdge::new(10, 0, 0, "B"),
            RawEdge::new(10, 0, 0, "C"),
        ];
        let (g, report) = build_graph(abc(), edges).expect("build");

        assert_eq!(g.successors(0), &[2, 1]);
        assert_eq!(report.edges, 2);
        assert_eq!(report.duplicate_edges, 1);
    }

    #[test]
    fn unresolvable_edges_are_dropped_and_counted() {
        let edges = vec![
            // unknown target title
            RawEdge::new(10, 0, 0, "Nowhere"),
            // target title exists, but in another namespace
            RawEdge::new(10, 0, 1, "B"),
            // unknown source id
            RawEdge::new(99, 0, 0, "B"),
            // source id exists but with a different namespace
            RawEdge::new(10, 2, 0, "B"),
            RawEdge::new(10, 0, 0, "B"),
        ];
        let (g, report) = build_graph(abc(), edges).expect("build");

        assert_eq!(report.dropped_edges, 4);
        assert_eq!(report.edges, 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn title_resolution_is_case_sensitive() {
        let (g, report) =
            build_graph(abc(), vec![RawEdge::new(10, 0, 0, "b")]).expect("build");
        assert_eq!(report.dropped_edges, 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loops_are_kept() {
        let (g, report) =
            build_graph(abc(), vec![RawEdge::new(10, 0, 0, "A")]).expect("build");
        assert_eq!(g.successors(0), &[0]);
        assert_eq!(report.self_loops, 1);
    }

    #[test]
    fn duplicate_node_key_aborts_the_build() {
        let mut nodes = abc();
        nodes.push(NodeRecord::new(40, 0, "A"));

        let err = build_graph(nodes, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            GraphBuildError::DuplicateNodeKey {
                namespace: 0,
                title: "A".to_string(),
                first_id: 10,
                second_id: 40,
            }
        );
    }

    #[test]
    fn same_title_in_two_namespaces_is_not_a_collision() {
        let mut nodes = abc();
        nodes.push(NodeRecord::new(40, 1, "A"));
        let (g, _) = build_graph(nodes, Vec::new()).expect("build");
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn duplicate_page_id_aborts_the_build() {
        let mut nodes = abc();
        nodes.push(NodeRecord::new(20, 0, "D"));

        let err = build_graph(nodes, Vec::new()).unwrap_err();
        assert_eq!(err, GraphBuildError::DuplicatePageId { id: 20 });
    }
}
