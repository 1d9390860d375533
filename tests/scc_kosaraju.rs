use wiki_scc::domain::graph::Graph;
use wiki_scc::domain::traits::SccDetector;
use wiki_scc::infrastructure::scc_kosaraju::KosarajuSccDetector;

#[test]
fn kosaraju_keeps_self_loop_as_cyclic_singleton() {
    // 0 -> 0
    let g = Graph::from_adjacency(vec![vec![0]]);

    let det = KosarajuSccDetector;
    let scc = det.compute_scc(&g);

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![0]);
    assert_eq!(scc.cyclic_component, vec![true]);
    assert_eq!(scc.non_trivial_count(), 0);
}

#[test]
fn kosaraju_detects_two_node_cycle() {
    // 0 <-> 1
    let g = Graph::from_adjacency(vec![vec![1], vec![0]]);

    let det = KosarajuSccDetector;
    let scc = det.compute_scc(&g);

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![0, 1]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn kosaraju_produces_stable_partition_for_dag() {
    // 0 -> 1 -> 2
    let g = Graph::from_adjacency(vec![vec![1], vec![2], vec![]]);

    let det = KosarajuSccDetector;
    let scc = det.compute_scc(&g);

    assert_eq!(scc.components.len(), 3);
    // Each node should be its own SCC, sources first.
    assert_eq!(scc.components, vec![vec![0], vec![1], vec![2]]);
    assert!(scc.cyclic_component.iter().all(|&b| !b));
}

#[test]
fn kosaraju_survives_a_very_long_chain() {
    // 0 -> 1 -> ... -> n-1 -> 0: one component, DFS depth n.
    let n = 200_000;
    let edges = (0..n).map(|i| vec![(i + 1) % n]).collect();
    let g = Graph::from_adjacency(edges);

    let scc = KosarajuSccDetector.compute_scc(&g);

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0].len(), n);
}
