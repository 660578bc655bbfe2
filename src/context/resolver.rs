use crate::error::GraphError;
use crate::graph::{FlowGraph, ParentIndex};
use ahash::AHashSet;

/// Walks a flow graph upward from a node and produces the ordered,
/// duplicate-free list of its transitive ancestors.
///
/// Ancestors are emitted post-order: the furthest-upstream lineage comes
/// first and the immediate parent last, which is the order upstream
/// conversation context must be concatenated in. Sibling parents keep
/// edge-list order. The starting node itself is never included.
pub struct AncestorResolver {
    index: ParentIndex,
}

struct Frame {
    id: String,
    next_parent: usize,
}

impl AncestorResolver {
    /// Builds the child-to-parents index for `graph`'s current edge list.
    pub fn new(graph: &FlowGraph) -> Self {
        Self {
            index: ParentIndex::from_edges(&graph.edges),
        }
    }

    pub fn from_index(index: ParentIndex) -> Self {
        Self { index }
    }

    /// Resolves the ordered ancestor ids of `start`.
    ///
    /// A start id with no incoming edges (including ids absent from the
    /// graph entirely) yields an empty list. An edge chain leading back into
    /// a node still being expanded is reported as
    /// [`GraphError::CycleDetected`] naming that node.
    ///
    /// The traversal is an explicit-stack rendition of the recursive
    /// depth-first walk: a node is appended to the output when its frame is
    /// popped, after all of its own ancestors have been emitted.
    pub fn resolve(&self, start: &str) -> Result<Vec<String>, GraphError> {
        let mut visited: AHashSet<String> = AHashSet::new();
        // Ids with a frame currently on the stack. Meeting one again means
        // the edge chain loops back into itself.
        let mut in_progress: AHashSet<String> = AHashSet::new();
        let mut ordered: Vec<String> = Vec::new();

        in_progress.insert(start.to_string());
        let mut stack = vec![Frame {
            id: start.to_string(),
            next_parent: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let parents = self.index.parents(&frame.id);
            if frame.next_parent < parents.len() {
                let parent = &parents[frame.next_parent];
                frame.next_parent += 1;

                if in_progress.contains(parent) {
                    return Err(GraphError::CycleDetected {
                        node_id: parent.clone(),
                    });
                }
                if visited.contains(parent) {
                    continue;
                }
                visited.insert(parent.clone());
                in_progress.insert(parent.clone());
                stack.push(Frame {
                    id: parent.clone(),
                    next_parent: 0,
                });
            } else {
                in_progress.remove(&frame.id);
                let finished = std::mem::take(&mut frame.id);
                stack.pop();
                // The start frame is popped last; it is not its own ancestor.
                if !stack.is_empty() {
                    ordered.push(finished);
                }
            }
        }

        Ok(ordered)
    }
}
