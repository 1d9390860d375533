use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;

pub struct TarjanSccDetector;

impl SccDetector for TarjanSccDetector {
    fn name(&self) -> &'static str {
        "tarjan"
    }

    fn compute_scc(&self, graph: &Graph) -> SccResult {
        tarjan_scc(graph)
    }
}

const UNVISITED: usize = usize::MAX;

/// Suspended visit of `node`; `next_edge` is the next successor position to examine.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_edge: usize,
}

struct TarjanState {
    next_index: usize,
    index: Vec<usize>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            next_index: 0,
            index: vec![UNVISITED; n],
            low_link: vec![UNVISITED; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize) {
        self.index[v] = self.next_index;
        self.low_link[v] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Pops the auxiliary stack down to and including `root`.
    fn emit_component(&mut self, root: usize) {
        let mut comp = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            comp.push(w);
            if w == root {
                break;
            }
        }
        self.components.push(comp);
    }
}

/// Components are emitted in completion order, i.e. reverse topological order
/// of the condensation.
fn tarjan_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();
    let mut st = TarjanState::new(n);
    let mut work: Vec<Frame> = Vec::new();

    for root in 0..n {
        if st.index[root] != UNVISITED {
            continue;
        }

        st.discover(root);
        work.push(Frame {
            node: root,
            next_edge: 0,
        });

        while let Some(frame) = work.last_mut() {
            let v = frame.node;

            if let Some(&w) = graph.successors(v).get(frame.next_edge) {
                frame.next_edge += 1;
                if st.index[w] == UNVISITED {
                    st.discover(w);
                    work.push(Frame {
                        node: w,
                        next_edge: 0,
                    });
                } else if st.on_stack[w] {
                    st.low_link[v] = st.low_link[v].min(st.index[w]);
                }
                continue;
            }

            // All successors of v explored.
            work.pop();
            if let Some(parent) = work.last() {
                let p = parent.node;
                st.low_link[p] = st.low_link[p].min(st.low_link[v]);
            }
            if st.low_link[v] == st.index[v] {
                st.emit_component(v);
            }
        }
    }

    debug_assert!(st.stack.is_empty());
    SccResult::from_components(graph, st.components)
}
