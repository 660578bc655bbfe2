//! Common test utilities for building flow graphs and conversations.
use chaiflow::prelude::*;

/// Pushes a text node with a fixed id and the given messages.
#[allow(dead_code)]
pub fn push_text_node(graph: &mut FlowGraph, id: &str, messages: Vec<Message>) {
    graph.nodes.push(FlowNode {
        id: id.to_string(),
        position: Position::new(0.0, 0.0),
        data: NodeData::Text(TextNodeData {
            messages,
            ..TextNodeData::default()
        }),
    });
}

/// Pushes a numeric node with a fixed id.
#[allow(dead_code)]
pub fn push_num_node(graph: &mut FlowGraph, id: &str, value: f64) {
    graph.nodes.push(FlowNode {
        id: id.to_string(),
        position: Position::new(0.0, 0.0),
        data: NodeData::Num(NumNodeData {
            title: "Number".to_string(),
            value,
        }),
    });
}

/// A linear chat lineage: `A -> B -> C`.
///
/// A holds `[u1, a1]`, B holds `[u2, a2]`, C is empty.
#[allow(dead_code)]
pub fn linear_flow() -> FlowGraph {
    let mut graph = FlowGraph::new();
    push_text_node(
        &mut graph,
        "A",
        vec![
            Message::user("u1", "first question"),
            Message::assistant("a1", "first answer"),
        ],
    );
    push_text_node(
        &mut graph,
        "B",
        vec![
            Message::user("u2", "second question"),
            Message::assistant("a2", "second answer"),
        ],
    );
    push_text_node(&mut graph, "C", vec![]);
    graph.connect("A", "B");
    graph.connect("B", "C");
    graph
}

/// A diamond: `G -> P1 -> C` and `G -> P2 -> C`, with the `P1 -> C` edge
/// listed before `P2 -> C`.
#[allow(dead_code)]
pub fn diamond_flow() -> FlowGraph {
    let mut graph = FlowGraph::new();
    push_text_node(&mut graph, "G", vec![Message::user("g1", "root prompt")]);
    push_text_node(&mut graph, "P1", vec![Message::user("p1", "left branch")]);
    push_text_node(&mut graph, "P2", vec![Message::user("p2", "right branch")]);
    push_text_node(&mut graph, "C", vec![]);
    graph.connect("G", "P1");
    graph.connect("G", "P2");
    graph.connect("P1", "C");
    graph.connect("P2", "C");
    graph
}

/// A minimal persisted flow in the canvas wire format.
#[allow(dead_code)]
pub fn sample_flow_json() -> &'static str {
    r#"{
        "nodes": [
            {
                "id": "text-1",
                "type": "text",
                "position": { "x": 0, "y": 0 },
                "data": {
                    "title": "Text",
                    "response": "",
                    "modelId": "openai/gpt-4o-mini",
                    "messages": [
                        { "id": "u1", "role": "user", "parts": [{ "type": "text", "text": "hello" }] },
                        { "id": "a1", "role": "assistant", "parts": [{ "type": "text", "text": "hi there" }] }
                    ]
                }
            },
            {
                "id": "num-1",
                "type": "num",
                "position": { "x": 40, "y": 120 },
                "data": { "title": "Number", "value": 7 }
            }
        ],
        "edges": [
            { "id": "e-1", "source": "num-1", "target": "text-1", "animated": true }
        ]
    }"#
}
