use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn name(&self) -> &'static str {
        "kosaraju"
    }

    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, graph.adjacency(), &mut seen, &mut order);
    }

    let rev = graph.reverse_adjacency();
    let mut component_of = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for &v in order.iter().rev() {
        if component_of[v] != usize::MAX {
            continue;
        }

        let cid = components.len();
        component_of[v] = cid;
        stack.push(v);
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for &p in rev[x].iter() {
                if component_of[p] == usize::MAX {
                    component_of[p] = cid;
                    stack.push(p);
                }
            }
        }

        components.push(comp);
    }

    SccResult::from_components(graph, components)
}

/// Appends nodes reachable from `start` to `order` in DFS finish order.
/// Frames are `(node, next successor position)`; no call-stack recursion.
fn iterative_finish_order(
    start: usize,
    edges: &[Vec<usize>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    seen[start] = true;

    while let Some(frame) = stack.last_mut() {
        let (v, next_i) = *frame;

        if let Some(&to) = edges[v].get(next_i) {
            frame.1 += 1;
            if !seen[to] {
                seen[to] = true;
                stack.push((to, 0));
            }
            continue;
        }

        stack.pop();
        order.push(v);
    }
}
