use super::{FlowEdge, FlowGraph, FlowNode, NodeData, NumNodeData, Position, TextNodeData};
use crate::error::FlowConversionError;
use crate::ui::{UiFlow, UiNode};

/// A trait for custom data models that can be converted into a [`FlowGraph`].
///
/// This is the extension point for making the engine format-agnostic: the
/// canvas persists React-Flow JSON (covered by [`UiFlow`]), but any stored
/// representation that can produce nodes and edges can implement this trait
/// and feed the same resolver.
pub trait IntoFlowGraph {
    /// Consumes the object and converts it into a canonical flow graph.
    fn into_flow_graph(self) -> Result<FlowGraph, FlowConversionError>;
}

impl IntoFlowGraph for UiFlow {
    fn into_flow_graph(self) -> Result<FlowGraph, FlowConversionError> {
        let mut graph = FlowGraph::new();
        for node in self.nodes {
            graph.nodes.push(convert_node(node)?);
        }
        for edge in self.edges {
            graph.edges.push(FlowEdge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
            });
        }
        Ok(graph)
    }
}

fn convert_node(node: UiNode) -> Result<FlowNode, FlowConversionError> {
    if !node.position.x.is_finite() || !node.position.y.is_finite() {
        return Err(FlowConversionError::InvalidPosition {
            node_id: node.id,
            x: node.position.x,
            y: node.position.y,
        });
    }

    let defaults_text = TextNodeData::default();
    let defaults_num = NumNodeData::default();
    let data = match node.node_type.as_str() {
        "text" => NodeData::Text(TextNodeData {
            title: node.data.title.unwrap_or(defaults_text.title),
            response: node.data.response.unwrap_or(defaults_text.response),
            model_id: node.data.model_id.unwrap_or(defaults_text.model_id),
            messages: node.data.messages.unwrap_or_default(),
        }),
        "num" => NodeData::Num(NumNodeData {
            title: node.data.title.unwrap_or(defaults_num.title),
            value: node.data.value.unwrap_or(defaults_num.value),
        }),
        other => {
            return Err(FlowConversionError::UnknownNodeType {
                node_id: node.id,
                type_name: other.to_string(),
            });
        }
    };

    Ok(FlowNode {
        id: node.id,
        position: Position::new(node.position.x, node.position.y),
        data,
    })
}
