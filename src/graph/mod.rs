//! The canonical in-memory flow model: nodes, edges, and the mutation API.

mod conversion;
mod definition;
mod index;
mod snapshot;

pub use conversion::IntoFlowGraph;
pub use definition::*;
pub use index::ParentIndex;
pub use snapshot::{
    FlowSnapshot, SnapshotData, SnapshotEdge, SnapshotMessage, SnapshotNode, SnapshotPart,
};
