//! Upstream-context resolution: who a node's ancestors are, and what
//! conversation history they contribute.
//!
//! Both halves are synchronous, read-only computations over an in-memory
//! [`FlowGraph`]; any persistence or LLM request happens after they return.

mod resolver;

pub use resolver::AncestorResolver;

use crate::error::GraphError;
use crate::graph::FlowGraph;
use crate::message::Message;

/// Collects the conversation history stored along a node's ancestry, ordered
/// from the furthest-upstream branch down to the immediate parent. The
/// node's own messages are not included.
///
/// Ancestor ids that no longer resolve to a node are skipped; nodes without
/// a conversation (numeric nodes, or text nodes with no messages yet)
/// contribute nothing. Overlapping content across ancestors is kept as-is.
pub fn ancestor_messages(graph: &FlowGraph, node_id: &str) -> Result<Vec<Message>, GraphError> {
    let resolver = AncestorResolver::new(graph);
    let ancestors = resolver.resolve(node_id)?;

    let mut messages = Vec::new();
    for ancestor_id in &ancestors {
        let Some(node) = graph.node(ancestor_id) else {
            continue;
        };
        if let Some(stored) = node.data.messages() {
            messages.extend(stored.iter().cloned());
        }
    }
    Ok(messages)
}
