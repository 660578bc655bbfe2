//! # Chaiflow - Flow-Graph Context Engine for Branching Conversations
//!
//! **Chaiflow** is the graph core behind a node-based chat canvas: users lay
//! out text nodes on a flow canvas, connect them, and branch conversations
//! into children that inherit their parent's context. This crate owns the
//! in-memory graph state and answers the one question the chat layer keeps
//! asking: *"which conversation history leads into this node?"*
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical in-memory
//! [`FlowGraph`]; the persisted React-Flow-style JSON is one wire format for
//! it, covered by [`ui::UiFlow`]. The primary workflow is:
//!
//! 1.  **Load or build a graph**: parse persisted flow JSON with
//!     [`ui::UiFlow::from_json`] and convert it through
//!     [`graph::IntoFlowGraph`], or start from [`FlowGraph::new`] and use the
//!     mutation API (`add_text_node`, `add_child_text_node`, `connect`).
//! 2.  **Resolve ancestry**: [`context::AncestorResolver`] walks the edges
//!     upward from a node and returns its ordered, de-duplicated ancestor
//!     ids — furthest lineage first, immediate parent last.
//! 3.  **Assemble context**: [`context::ancestor_messages`] maps that order
//!     onto the messages stored on each ancestor, producing the flat history
//!     to seed the next LLM request with.
//!
//! ## Quick Start
//!
//! ```rust
//! use chaiflow::prelude::*;
//!
//! fn main() -> Result<(), GraphError> {
//!     let mut graph = FlowGraph::new();
//!
//!     // A root conversation node with one exchange in it.
//!     let root = graph.add_text_node(Position::new(0.0, 0.0), None);
//!     if let Some(data) = graph.node_mut(&root).and_then(|n| n.data.as_text_mut()) {
//!         data.messages.push(Message::user("u1", "What is a monad?"));
//!         data.messages.push(Message::assistant("a1", "A monoid in the category..."));
//!     }
//!
//!     // Branch: the child starts with a copy of the parent's conversation
//!     // and an edge from parent to child.
//!     let child = graph.add_child_text_node(&root).expect("root exists");
//!
//!     // The history a request from the child should carry.
//!     let history = ancestor_messages(&graph, &child)?;
//!     assert_eq!(history.len(), 2);
//!     assert_eq!(history[0].text(), "What is a monad?");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! Everything here is synchronous and single-threaded: mutations and
//! resolutions run on the caller's thread over settled state. Persisting a
//! snapshot (see [`graph::FlowSnapshot`]) and sending assembled context to a
//! model are the callers' concerns.

pub mod context;
pub mod error;
pub mod graph;
pub mod message;
pub mod prelude;
pub mod ui;

pub use graph::FlowGraph;
