use thiserror::Error;

/// Errors that can occur while resolving ancestors in a flow graph.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("Cycle detected at node '{node_id}' while walking ancestor edges")]
    CycleDetected { node_id: String },
}

/// Errors that can occur when converting a wire-format flow into a `FlowGraph`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unrecognized type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node '{node_id}' has a non-finite position ({x}, {y})")]
    InvalidPosition { node_id: String, x: f64, y: f64 },

    #[error("Invalid flow data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a flow snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot codec failed: {0}")]
    Codec(String),
}
