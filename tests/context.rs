//! Tests for upstream context assembly.
mod common;
use chaiflow::prelude::*;
use common::*;

#[test]
fn test_linear_chain_concatenates_in_conversation_order() {
    let graph = linear_flow();
    let history = ancestor_messages(&graph, "C").unwrap();
    let ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["u1", "a1", "u2", "a2"]);
}

#[test]
fn test_own_messages_are_not_part_of_upstream_context() {
    let graph = linear_flow();
    let history = ancestor_messages(&graph, "B").unwrap();
    let ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["u1", "a1"]);
}

#[test]
fn test_root_node_has_empty_context() {
    let graph = linear_flow();
    assert!(ancestor_messages(&graph, "A").unwrap().is_empty());
}

#[test]
fn test_diamond_includes_shared_lineage_once() {
    let graph = diamond_flow();
    let history = ancestor_messages(&graph, "C").unwrap();
    let ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["g1", "p1", "p2"]);
}

#[test]
fn test_stale_ancestor_ids_are_skipped() {
    let mut graph = linear_flow();
    graph.remove_node("B");
    // B's edges are still present, so A is still reachable from C through
    // the dangling reference; only B's contribution disappears.
    let history = ancestor_messages(&graph, "C").unwrap();
    let ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["u1", "a1"]);
}

#[test]
fn test_num_ancestors_contribute_nothing() {
    let mut graph = FlowGraph::new();
    push_num_node(&mut graph, "N", 7.0);
    push_text_node(&mut graph, "A", vec![Message::user("u1", "hi")]);
    push_text_node(&mut graph, "C", vec![]);
    graph.connect("N", "C");
    graph.connect("A", "C");

    let history = ancestor_messages(&graph, "C").unwrap();
    let ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["u1"]);
}

#[test]
fn test_overlapping_content_is_not_deduplicated() {
    // Branching copies the parent's conversation into the child, so both
    // nodes store the same exchange; assembly keeps both copies.
    let mut graph = FlowGraph::new();
    let parent = graph.add_text_node(Position::new(0.0, 0.0), None);
    graph
        .node_mut(&parent)
        .unwrap()
        .data
        .as_text_mut()
        .unwrap()
        .messages
        .push(Message::user("u1", "same text"));

    let child = graph.add_child_text_node(&parent).unwrap();
    let grandchild = graph.add_child_text_node(&child).unwrap();

    let history = ancestor_messages(&graph, &grandchild).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].text(), "same text");
    assert_eq!(history[1].text(), "same text");
}

#[test]
fn test_cycle_propagates_as_error() {
    let mut graph = FlowGraph::new();
    push_text_node(&mut graph, "A", vec![]);
    push_text_node(&mut graph, "B", vec![]);
    graph.connect("A", "B");
    graph.connect("B", "A");
    push_text_node(&mut graph, "C", vec![]);
    graph.connect("B", "C");

    assert!(matches!(
        ancestor_messages(&graph, "C"),
        Err(GraphError::CycleDetected { .. })
    ));
}
