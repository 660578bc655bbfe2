use crate::error::FlowConversionError;
use crate::message::Message;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canvas coordinate as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// Loose node payload as the canvas persists it. Which fields are present
/// depends on the node type; unrecognized fields survive a round-trip via
/// `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiNodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "modelId")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One node as the canvas persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: UiPosition,
    pub data: UiNodeData,
}

/// One edge as the canvas persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "targetHandle")]
    pub target_handle: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub animated: bool,
}

/// A complete persisted flow: the shape handed to the persistence
/// collaborator on every mutation, and the shape loaded back when a canvas
/// is reopened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiFlow {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl UiFlow {
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        serde_json::from_str(json).map_err(|e| FlowConversionError::JsonParseError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, FlowConversionError> {
        serde_json::to_string(self).map_err(|e| FlowConversionError::JsonParseError(e.to_string()))
    }
}
