//! Wire-format types for the canvas persistence layer.
//!
//! The canvas stores flows as loose React-Flow-style JSON; these types parse
//! that shape verbatim and convert to the canonical [`FlowGraph`] model
//! through [`IntoFlowGraph`].
//!
//! [`FlowGraph`]: crate::graph::FlowGraph
//! [`IntoFlowGraph`]: crate::graph::IntoFlowGraph

mod types;

pub use types::*;
