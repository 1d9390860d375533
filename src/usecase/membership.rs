use crate::domain::graph::SccResult;

/// Node -> non-trivial component lookup, materialized once from a partition.
///
/// Singleton components (isolated nodes, nodes whose only cycle is a self-loop)
/// are not indexed.
#[derive(Debug, Clone, Default)]
pub struct MembershipIndex {
    slot_of: Vec<Option<usize>>,
    components: Vec<Vec<usize>>,
}

impl MembershipIndex {
    pub fn build(partition: &SccResult) -> Self {
        let mut slot_of = vec![None; partition.component_of.len()];
        let mut components = Vec::with_capacity(partition.non_trivial_count());

        for comp in partition.components.iter().filter(|c| c.len() > 1) {
            let slot = components.len();
            for &v in comp {
                slot_of[v] = Some(slot);
            }
            let mut members = comp.clone();
            members.sort_unstable();
            components.push(members);
        }

        Self {
            slot_of,
            components,
        }
    }

    /// Members of the node's component in ascending index order, or `None` when
    /// the node is in no component of two or more members.
    pub fn component_of(&self, node: usize) -> Option<&[usize]> {
        let slot = (*self.slot_of.get(node)?)?;
        Some(&self.components[slot])
    }

    pub fn contains(&self, node: usize) -> bool {
        self.component_of(node).is_some()
    }

    /// Number of indexed components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn indexed_nodes(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    pub fn components(&self) -> impl Iterator<Item = &[usize]> {
        self.components.iter().map(Vec::as_slice)
    }
}
