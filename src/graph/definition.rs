use crate::message::Message;

/// Model requests from a fresh node default to this until the user picks one.
pub const DEFAULT_MODEL_ID: &str = "openai/gpt-4o-mini";

/// Horizontal offset applied when spawning a child node next to its parent.
pub const CHILD_OFFSET_X: f64 = 320.0;

/// A canvas coordinate. Presentation-only; the wire boundary rejects
/// non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Payload of a text node: one branch of a conversation plus the model it
/// talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNodeData {
    pub title: String,
    pub response: String,
    pub model_id: String,
    pub messages: Vec<Message>,
}

impl Default for TextNodeData {
    fn default() -> Self {
        Self {
            title: "Text".to_string(),
            response: String::new(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            messages: Vec::new(),
        }
    }
}

/// Payload of a numeric node.
#[derive(Debug, Clone, PartialEq)]
pub struct NumNodeData {
    pub title: String,
    pub value: f64,
}

impl Default for NumNodeData {
    fn default() -> Self {
        Self {
            title: "Number".to_string(),
            value: 0.0,
        }
    }
}

/// Kind-specific node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Text(TextNodeData),
    Num(NumNodeData),
}

impl NodeData {
    /// The wire discriminator for this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeData::Text(_) => "text",
            NodeData::Num(_) => "num",
        }
    }

    /// The conversation stored on this node, if its kind carries one.
    pub fn messages(&self) -> Option<&[Message]> {
        match self {
            NodeData::Text(data) => Some(&data.messages),
            NodeData::Num(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNodeData> {
        match self {
            NodeData::Text(data) => Some(data),
            NodeData::Num(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNodeData> {
        match self {
            NodeData::Text(data) => Some(data),
            NodeData::Num(_) => None,
        }
    }
}

/// A single unit in the flow canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
}

/// A directed connection from a parent node (`source`) to a child (`target`).
/// Both endpoints should reference nodes in the same graph, but dangling
/// references are tolerated rather than prevented.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

/// The full node/edge pair owned by one editing session.
///
/// This is the authoritative in-memory state for a canvas; the mutation
/// methods below are the only sanctioned way the UI changes it. All
/// operations are synchronous and single-threaded — persistence and LLM
/// requests happen strictly after this type hands back its result.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    next_seq: u64,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Removes a node, returning it if it existed. Edges touching the node
    /// are left in place; resolution skips the dangling references.
    pub fn remove_node(&mut self, id: &str) -> Option<FlowNode> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    /// Inserts a new text node with an empty conversation and returns its id.
    pub fn add_text_node(&mut self, position: Position, initial_text: Option<&str>) -> String {
        let id = self.fresh_id("text");
        let mut data = TextNodeData::default();
        if let Some(text) = initial_text {
            data.response = text.to_string();
        }
        self.nodes.push(FlowNode {
            id: id.clone(),
            position,
            data: NodeData::Text(data),
        });
        id
    }

    /// Inserts a new numeric node and returns its id.
    pub fn add_num_node(&mut self, position: Position, initial_value: Option<f64>) -> String {
        let id = self.fresh_id("num");
        let mut data = NumNodeData::default();
        if let Some(value) = initial_value {
            data.value = value;
        }
        self.nodes.push(FlowNode {
            id: id.clone(),
            position,
            data: NodeData::Num(data),
        });
        id
    }

    /// Spawns a text node to the right of `parent_id`, seeded with a copy of
    /// the parent's title, model and current messages, and connects the two.
    /// Returns `None` when the parent does not exist.
    ///
    /// The child owns its copy: later edits to the parent's conversation do
    /// not flow into already-created children.
    pub fn add_child_text_node(&mut self, parent_id: &str) -> Option<String> {
        let parent = self.node(parent_id)?;
        let position = Position::new(parent.position.x + CHILD_OFFSET_X, parent.position.y);
        let data = match &parent.data {
            NodeData::Text(parent_data) => TextNodeData {
                title: parent_data.title.clone(),
                response: String::new(),
                model_id: parent_data.model_id.clone(),
                messages: parent_data.messages.clone(),
            },
            NodeData::Num(parent_data) => TextNodeData {
                title: parent_data.title.clone(),
                ..TextNodeData::default()
            },
        };

        let id = self.fresh_id("text");
        self.nodes.push(FlowNode {
            id: id.clone(),
            position,
            data: NodeData::Text(data),
        });
        self.push_edge(parent_id.to_string(), id.clone(), None, None);
        Some(id)
    }

    /// Appends an edge from `source` to `target` and returns its id. No
    /// duplicate or cycle validation is performed.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        self.push_edge(source.to_string(), target.to_string(), None, None)
    }

    /// Like [`connect`](Self::connect), for multi-handle nodes.
    pub fn connect_with_handles(
        &mut self,
        source: &str,
        target: &str,
        source_handle: &str,
        target_handle: &str,
    ) -> String {
        self.push_edge(
            source.to_string(),
            target.to_string(),
            Some(source_handle.to_string()),
            Some(target_handle.to_string()),
        )
    }

    fn push_edge(
        &mut self,
        source: String,
        target: String,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> String {
        let id = self.fresh_edge_id(&source, &target);
        self.edges.push(FlowEdge {
            id: id.clone(),
            source,
            target,
            source_handle,
            target_handle,
        });
        id
    }

    /// Generates a node id that is unused in this graph. Loaded flows may
    /// carry ids from any scheme, so candidates are probed until one is free.
    fn fresh_id(&mut self, prefix: &str) -> String {
        loop {
            self.next_seq += 1;
            let candidate = format!("{}-{}", prefix, self.next_seq);
            if self.node(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn fresh_edge_id(&mut self, source: &str, target: &str) -> String {
        loop {
            self.next_seq += 1;
            let candidate = format!("e-{}-{}-{}", source, target, self.next_seq);
            if self.edges.iter().all(|e| e.id != candidate) {
                return candidate;
            }
        }
    }
}
