//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need: the graph model and mutation API,
//! the ancestry resolver and context assembler, the message model, and the
//! error types.
//!
//! # Example
//!
//! ```rust
//! use chaiflow::prelude::*;
//!
//! let mut graph = FlowGraph::new();
//! let id = graph.add_text_node(Position::new(0.0, 0.0), Some("hello"));
//! assert!(ancestor_messages(&graph, &id).unwrap().is_empty());
//! ```

// Graph model and mutation API
pub use crate::graph::{
    FlowEdge, FlowGraph, FlowNode, FlowSnapshot, IntoFlowGraph, NodeData, NumNodeData, ParentIndex,
    Position, TextNodeData,
};

// Ancestry resolution and context assembly
pub use crate::context::{AncestorResolver, ancestor_messages};

// Conversation messages
pub use crate::message::{Message, MessagePart, Role};

// Wire format
pub use crate::ui::UiFlow;

// Error types
pub use crate::error::{FlowConversionError, GraphError, SnapshotError};
