use super::FlowEdge;
use itertools::Itertools;
use std::collections::HashMap;

/// Child-to-parents adjacency derived from an edge list.
///
/// Parents keep edge-list order, duplicates included. The index is a pure
/// function of the edges and is rebuilt per resolution call; graphs are
/// editor-sized, so incremental maintenance is not worth its bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    parents: HashMap<String, Vec<String>>,
}

impl ParentIndex {
    pub fn from_edges(edges: &[FlowEdge]) -> Self {
        let parents = edges
            .iter()
            .map(|e| (e.target.clone(), e.source.clone()))
            .into_group_map();
        Self { parents }
    }

    /// Immediate parents of `id`, in edge-list order. Unknown ids have no
    /// parents rather than being an error.
    pub fn parents(&self, id: &str) -> &[String] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
