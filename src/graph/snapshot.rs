//! Compact binary snapshots of a flow, plus the JSON wire projection.
//!
//! Two persisted shapes exist on purpose: [`UiFlow`] is the loose JSON the
//! canvas exchanges with the persistence collaborator, while
//! [`FlowSnapshot`] is a compact bincode artifact for local caching. The
//! JSON shape leans on serde tags and flattening, which non-self-describing
//! formats cannot decode, so the snapshot carries its own plain structs.

use super::{FlowEdge, FlowGraph, FlowNode, NodeData, NumNodeData, Position, TextNodeData};
use crate::error::SnapshotError;
use crate::message::{Message, MessagePart, Role};
use crate::ui::{UiEdge, UiFlow, UiNode, UiNodeData, UiPosition};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

impl FlowGraph {
    /// Produces the wire representation handed to the persistence
    /// collaborator on each mutation.
    pub fn to_ui(&self) -> UiFlow {
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let data = match &node.data {
                    NodeData::Text(text) => UiNodeData {
                        title: Some(text.title.clone()),
                        response: Some(text.response.clone()),
                        model_id: Some(text.model_id.clone()),
                        messages: Some(text.messages.clone()),
                        ..UiNodeData::default()
                    },
                    NodeData::Num(num) => UiNodeData {
                        title: Some(num.title.clone()),
                        value: Some(num.value),
                        ..UiNodeData::default()
                    },
                };
                UiNode {
                    id: node.id.clone(),
                    node_type: node.data.kind().to_string(),
                    position: UiPosition {
                        x: node.position.x,
                        y: node.position.y,
                    },
                    data,
                }
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|edge| UiEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                source_handle: edge.source_handle.clone(),
                target_handle: edge.target_handle.clone(),
                animated: false,
            })
            .collect();

        UiFlow { nodes, edges }
    }

    /// Captures the graph as a compact snapshot.
    pub fn to_snapshot(&self) -> FlowSnapshot {
        FlowSnapshot::from(self)
    }
}

/// A complete flow captured for binary persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub data: SnapshotData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SnapshotData {
    Text {
        title: String,
        response: String,
        model_id: String,
        messages: Vec<SnapshotMessage>,
    },
    Num {
        title: String,
        value: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMessage {
    pub id: String,
    pub role: Role,
    pub parts: Vec<SnapshotPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SnapshotPart {
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

fn snapshot_message(message: &Message) -> SnapshotMessage {
    SnapshotMessage {
        id: message.id.clone(),
        role: message.role,
        parts: message
            .parts
            .iter()
            .map(|part| match part {
                MessagePart::Text { text } => SnapshotPart::Text(text.clone()),
            })
            .collect(),
    }
}

fn restore_message(message: SnapshotMessage) -> Message {
    Message {
        id: message.id,
        role: message.role,
        parts: message
            .parts
            .into_iter()
            .map(|part| match part {
                SnapshotPart::Text(text) => MessagePart::Text { text },
            })
            .collect(),
    }
}

impl From<&FlowGraph> for FlowSnapshot {
    fn from(graph: &FlowGraph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| SnapshotNode {
                id: node.id.clone(),
                x: node.position.x,
                y: node.position.y,
                data: match &node.data {
                    NodeData::Text(text) => SnapshotData::Text {
                        title: text.title.clone(),
                        response: text.response.clone(),
                        model_id: text.model_id.clone(),
                        messages: text.messages.iter().map(snapshot_message).collect(),
                    },
                    NodeData::Num(num) => SnapshotData::Num {
                        title: num.title.clone(),
                        value: num.value,
                    },
                },
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .map(|edge| SnapshotEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                source_handle: edge.source_handle.clone(),
                target_handle: edge.target_handle.clone(),
            })
            .collect();

        Self { nodes, edges }
    }
}

impl From<FlowSnapshot> for FlowGraph {
    fn from(snapshot: FlowSnapshot) -> Self {
        let mut graph = FlowGraph::new();
        for node in snapshot.nodes {
            let data = match node.data {
                SnapshotData::Text {
                    title,
                    response,
                    model_id,
                    messages,
                } => NodeData::Text(TextNodeData {
                    title,
                    response,
                    model_id,
                    messages: messages.into_iter().map(restore_message).collect(),
                }),
                SnapshotData::Num { title, value } => NodeData::Num(NumNodeData { title, value }),
            };
            graph.nodes.push(FlowNode {
                id: node.id,
                position: Position::new(node.x, node.y),
                data,
            });
        }
        for edge in snapshot.edges {
            graph.edges.push(FlowEdge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
            });
        }
        graph
    }
}

impl FlowSnapshot {
    /// Serializes the snapshot to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Codec(e.to_string()))
    }

    /// Deserializes a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            // bincode 2 returns a tuple (data, bytes_read)
            .map(|(snapshot, _)| snapshot)
            .map_err(|e| SnapshotError::Codec(e.to_string()))
    }

    /// Saves the snapshot to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}
