use crate::domain::model::{Page, PageId};
use once_cell::sync::OnceCell;

/// Immutable directed page graph.
///
/// Pages are kept in ascending page-id order and node index `i` is the position
/// in that order. `edges[i]` lists the successors of `i` in first-insertion order,
/// without duplicates. The reverse view is derived on first use.
#[derive(Debug, Default)]
pub struct Graph {
    pages: Vec<Page>,
    edges: Vec<Vec<usize>>,
    reverse: OnceCell<Vec<Vec<usize>>>,
}

impl Graph {
    /// `pages` must be sorted by id and `edges` must have one entry per page.
    pub(crate) fn from_parts(pages: Vec<Page>, edges: Vec<Vec<usize>>) -> Self {
        debug_assert_eq!(pages.len(), edges.len());
        debug_assert!(pages.windows(2).all(|w| w[0].id < w[1].id));
        Self {
            pages,
            edges,
            reverse: OnceCell::new(),
        }
    }

    /// Synthetic graph over nodes `0..edges.len()`; page `i` gets id `i` and title `i`.
    /// Duplicate successors are collapsed, first occurrence wins.
    ///
    /// # Panics
    ///
    /// Panics if a successor is not a valid node index.
    pub fn from_adjacency(edges: Vec<Vec<usize>>) -> Self {
        let n = edges.len();
        let pages = (0..n)
            .map(|i| Page {
                id: i as PageId,
                namespace: 0,
                title: i.to_string(),
            })
            .collect();

        let edges = edges
            .into_iter()
            .map(|outs| {
                let mut seen = std::collections::HashSet::with_capacity(outs.len());
                outs.into_iter()
                    .filter(|&v| {
                        assert!(v < n, "successor {v} out of range for {n} nodes");
                        seen.insert(v)
                    })
                    .collect()
            })
            .collect();

        Self::from_parts(pages, edges)
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    pub fn successors(&self, node: usize) -> &[usize] {
        &self.edges[node]
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.edges
    }

    /// Transposed adjacency, materialized once per graph instance.
    pub fn reverse_adjacency(&self) -> &[Vec<usize>] {
        self.reverse.get_or_init(|| {
            let mut rev: Vec<Vec<usize>> = vec![Vec::new(); self.edges.len()];
            for (u, outs) in self.edges.iter().enumerate() {
                for &v in outs {
                    rev[v].push(u);
                }
            }
            rev
        })
    }

    /// Whether the reverse view has been computed on this instance.
    pub fn reverse_materialized(&self) -> bool {
        self.reverse.get().is_some()
    }

    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.reverse_adjacency()[node]
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges[from].contains(&to)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, node: usize) -> &Page {
        &self.pages[node]
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.binary_search_by_key(&id, |p| p.id).ok()
    }
}

/// Clones pages and adjacency only; the copy starts with a cold reverse view.
impl Clone for Graph {
    fn clone(&self) -> Self {
        Self::from_parts(self.pages.clone(), self.edges.clone())
    }
}

/// A full SCC partition of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// node index -> position in `components`
    pub component_of: Vec<usize>,
    /// Each component sorted ascending. Order of components is algorithm-specific.
    pub components: Vec<Vec<usize>>,
    /// Component contains a cycle: more than one member, or a self-loop.
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    /// Finishes a partition produced by a detector: sorts members and derives
    /// the node lookup and cycle flags.
    pub fn from_components(graph: &Graph, mut components: Vec<Vec<usize>>) -> Self {
        let mut component_of = vec![usize::MAX; graph.node_count()];
        let mut cyclic_component = Vec::with_capacity(components.len());

        for (cid, comp) in components.iter_mut().enumerate() {
            comp.sort_unstable();
            for &v in comp.iter() {
                component_of[v] = cid;
            }
            let cyclic = comp.len() > 1 || graph.has_edge(comp[0], comp[0]);
            cyclic_component.push(cyclic);
        }

        debug_assert!(component_of.iter().all(|&c| c != usize::MAX));

        Self {
            component_of,
            components,
            cyclic_component,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, node: usize) -> &[usize] {
        &self.components[self.component_of[node]]
    }

    /// Components with two or more members.
    pub fn non_trivial_count(&self) -> usize {
        self.components.iter().filter(|c| c.len() > 1).count()
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn largest_component_len(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// `None` when both results group nodes identically, otherwise a node whose
    /// component differs between the two.
    pub fn divergence(&self, other: &SccResult) -> Option<usize> {
        if self.component_of.len() != other.component_of.len() {
            return Some(self.component_of.len().min(other.component_of.len()));
        }

        // Members are sorted, so equal sets compare equal as slices. If every
        // component here matches the other's component of its first member,
        // the two partitions are identical.
        for comp in self.components.iter() {
            let first = comp[0];
            let theirs = other.component(first);
            if theirs != comp.as_slice() {
                let witness = comp
                    .iter()
                    .chain(theirs.iter())
                    .copied()
                    .find(|&v| self.component(v) != other.component(v))
                    .unwrap_or(first);
                return Some(witness);
            }
        }
        None
    }
}
