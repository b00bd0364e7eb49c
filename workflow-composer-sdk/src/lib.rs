//! Shared vocabulary for workflow-composer
//!
//! This crate holds everything the TUI and its tests agree on: the node kind
//! catalog, the graph registry that owns nodes and connections, and the
//! versioned JSON document an export produces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version stamped on every exported workflow document
pub const SCHEMA_VERSION: &str = "2.0";

/// Model written into every exported agent's `llm_config`
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Temperature written into every exported agent's `llm_config`
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Errors reported by graph operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("no node with id `{0}`")]
    NotFound(String),
}

/// The supported node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Agent,
    GroupChat,
    Sequential,
    Parallel,
}

/// Display metadata for a node kind
///
/// `color_tag` is an opaque rendering directive; only the display layer
/// translates it into an actual terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub label: &'static str,
    pub color_tag: &'static str,
    pub description: &'static str,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Agent,
        NodeKind::GroupChat,
        NodeKind::Sequential,
        NodeKind::Parallel,
    ];

    /// Catalog lookup, total over the four kinds
    pub fn info(self) -> KindInfo {
        match self {
            NodeKind::Agent => KindInfo {
                label: "Agent",
                color_tag: "cyan",
                description: "A single assistant agent with its own LLM configuration.",
            },
            NodeKind::GroupChat => KindInfo {
                label: "Group Chat",
                color_tag: "magenta",
                description: "A shared conversation between several agents.",
            },
            NodeKind::Sequential => KindInfo {
                label: "Sequential",
                color_tag: "yellow",
                description: "Runs its participants one after another.",
            },
            NodeKind::Parallel => KindInfo {
                label: "Parallel",
                color_tag: "green",
                description: "Runs its participants at the same time.",
            },
        }
    }

    /// Lowercase token used in default node names
    pub fn slug(self) -> &'static str {
        match self {
            NodeKind::Agent => "agent",
            NodeKind::GroupChat => "group_chat",
            NodeKind::Sequential => "sequential",
            NodeKind::Parallel => "parallel",
        }
    }
}

/// A typed unit in the workflow graph
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
}

/// A directed reference between two nodes
///
/// Purely illustrative: cycles, duplicates and self-references are all
/// permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

/// The graph registry: single owner of nodes, connections and the current
/// selection
///
/// Insertion order is canonical. Every view and the export iterate nodes in
/// the order they were added; there is no 2-D geometry model.
#[derive(Debug, Default)]
pub struct NodeGraph {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    pub selected: Option<String>,
    next_id: u64,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node of the given kind with a fresh id and a default name
    ///
    /// Ids come from a monotonic counter and are never reused within the
    /// graph's lifetime.
    pub fn add_node(&mut self, kind: NodeKind) -> Node {
        self.next_id += 1;
        let node = Node {
            id: format!("node-{}", self.next_id),
            kind,
            name: format!("new_{}_{}", kind.slug(), self.nodes.len() + 1),
        };
        self.nodes.push(node.clone());
        node
    }

    /// Remove a node if present; absent ids are a no-op
    ///
    /// Cascades: every connection touching the node is removed and a
    /// selection pointing at it is cleared.
    pub fn delete_node(&mut self, id: &str) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return;
        }
        self.connections.retain(|c| c.from != id && c.to != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// Rename a node; names are not required to be unique
    pub fn rename_node(&mut self, id: &str, new_name: impl Into<String>) -> Result<(), GraphError> {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.name = new_name.into();
                Ok(())
            }
            None => Err(GraphError::NotFound(id.to_string())),
        }
    }

    /// Linear lookup; node counts are small and human-created
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn select(&mut self, id: &str) -> Result<(), GraphError> {
        if self.find_by_id(id).is_none() {
            return Err(GraphError::NotFound(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_deref().and_then(|id| self.find_by_id(id))
    }

    /// Connect two nodes
    ///
    /// Both endpoints must exist; beyond that the edge is not validated.
    pub fn connect(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        for id in [from, to] {
            if self.find_by_id(id).is_none() {
                return Err(GraphError::NotFound(id.to_string()));
            }
        }
        self.connections.push(Connection {
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(())
    }
}

/// Versioned workflow document produced by an export
///
/// Struct declaration order is the wire key order. Note the deliberate
/// asymmetry inherited from the schema: `agents` carries Agent-kind nodes
/// only, while `orchestration.agents` lists the name of every node in
/// insertion order regardless of kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowExport {
    pub schema_version: String,
    pub workflow_id: String,
    pub agents: Vec<AgentSpec>,
    pub orchestration: Orchestration,
}

/// One exported Agent-kind node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub class: String,
    pub system_message: String,
    pub llm_config: LlmConfig,
    pub tools: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orchestration {
    #[serde(rename = "type")]
    pub kind: String,
    pub agents: Vec<String>,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: "AssistantAgent".to_string(),
            system_message: String::new(),
            llm_config: LlmConfig {
                model: DEFAULT_MODEL.to_string(),
                temperature: DEFAULT_TEMPERATURE,
            },
            tools: Vec::new(),
        }
    }
}

impl WorkflowExport {
    /// Build an export from the current graph state
    ///
    /// `workflow_id` is supplied by the caller so tests can pin it; the TUI
    /// passes a fresh `workflow-<uuid>` per export. Never fails, including
    /// on an empty graph.
    pub fn from_graph(graph: &NodeGraph, workflow_id: impl Into<String>) -> Self {
        let agents = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Agent)
            .map(|n| AgentSpec::new(&n.name))
            .collect();
        let order = graph.nodes.iter().map(|n| n.name.clone()).collect();

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            workflow_id: workflow_id.into(),
            agents,
            orchestration: Orchestration {
                kind: "Sequential".to_string(),
                agents: order,
            },
        }
    }

    /// Serialize as a single pretty-printed JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_sequential_ids_and_default_names() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        let b = graph.add_node(NodeKind::GroupChat);

        assert_eq!(a.id, "node-1");
        assert_eq!(a.name, "new_agent_1");
        assert_eq!(b.id, "node-2");
        assert_eq!(b.name, "new_group_chat_2");
    }

    #[test]
    fn added_nodes_are_findable_until_deleted() {
        let mut graph = NodeGraph::new();
        let node = graph.add_node(NodeKind::Sequential);

        assert!(graph.find_by_id(&node.id).is_some());
        graph.delete_node(&node.id);
        assert!(graph.find_by_id(&node.id).is_none());
    }

    #[test]
    fn size_tracks_adds_and_deletes() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        graph.add_node(NodeKind::Parallel);
        graph.add_node(NodeKind::Agent);
        assert_eq!(graph.nodes.len(), 3);

        graph.delete_node(&a.id);
        assert_eq!(graph.nodes.len(), 2);

        // Deleting an absent id is a no-op, not an error
        graph.delete_node("node-99");
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        graph.delete_node(&a.id);
        let b = graph.add_node(NodeKind::Agent);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn delete_cascades_connections() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        let b = graph.add_node(NodeKind::Agent);
        let c = graph.add_node(NodeKind::Sequential);
        graph.connect(&a.id, &b.id).unwrap();
        graph.connect(&b.id, &c.id).unwrap();
        graph.connect(&a.id, &c.id).unwrap();

        graph.delete_node(&b.id);

        assert_eq!(graph.connections.len(), 1);
        assert!(graph
            .connections
            .iter()
            .all(|e| e.from != b.id && e.to != b.id));
    }

    #[test]
    fn delete_clears_matching_selection_only() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        let b = graph.add_node(NodeKind::Parallel);

        graph.select(&a.id).unwrap();
        graph.delete_node(&b.id);
        assert_eq!(graph.selected.as_deref(), Some(a.id.as_str()));

        graph.delete_node(&a.id);
        assert_eq!(graph.selected, None);
    }

    #[test]
    fn select_unknown_id_is_not_found() {
        let mut graph = NodeGraph::new();
        assert_eq!(
            graph.select("node-1"),
            Err(GraphError::NotFound("node-1".to_string()))
        );

        graph.add_node(NodeKind::Agent);
        assert_eq!(graph.select("node-1"), Ok(()));
    }

    #[test]
    fn deselect_is_idempotent() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        graph.select(&a.id).unwrap();

        graph.deselect();
        assert_eq!(graph.selected, None);
        graph.deselect();
        assert_eq!(graph.selected, None);
    }

    #[test]
    fn rename_keeps_insertion_order() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);
        let b = graph.add_node(NodeKind::GroupChat);
        let c = graph.add_node(NodeKind::Parallel);

        graph.rename_node(&b.id, "planner_chat").unwrap();

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, [a.id.as_str(), b.id.as_str(), c.id.as_str()]);
        assert_eq!(graph.find_by_id(&b.id).map(|n| n.name.as_str()), Some("planner_chat"));
    }

    #[test]
    fn rename_unknown_id_is_not_found() {
        let mut graph = NodeGraph::new();
        assert_eq!(
            graph.rename_node("node-7", "x"),
            Err(GraphError::NotFound("node-7".to_string()))
        );
    }

    #[test]
    fn connect_requires_both_endpoints() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Agent);

        assert_eq!(
            graph.connect(&a.id, "node-9"),
            Err(GraphError::NotFound("node-9".to_string()))
        );
        assert!(graph.connections.is_empty());

        let b = graph.add_node(NodeKind::Sequential);
        assert_eq!(graph.connect(&a.id, &b.id), Ok(()));
        // Duplicates and self-references are not validated away
        assert_eq!(graph.connect(&a.id, &b.id), Ok(()));
        assert_eq!(graph.connect(&a.id, &a.id), Ok(()));
        assert_eq!(graph.connections.len(), 3);
    }

    #[test]
    fn catalog_is_total() {
        for kind in NodeKind::ALL {
            let info = kind.info();
            assert!(!info.label.is_empty());
            assert!(!info.color_tag.is_empty());
            assert!(!info.description.is_empty());
            assert!(!kind.slug().is_empty());
        }
    }

    #[test]
    fn export_of_empty_graph() {
        let graph = NodeGraph::new();
        let export = WorkflowExport::from_graph(&graph, "workflow-test");

        assert_eq!(export.schema_version, SCHEMA_VERSION);
        assert_eq!(export.workflow_id, "workflow-test");
        assert!(export.agents.is_empty());
        assert_eq!(export.orchestration.kind, "Sequential");
        assert!(export.orchestration.agents.is_empty());
    }

    #[test]
    fn export_filters_agents_but_orders_every_node() {
        let mut graph = NodeGraph::new();
        let x = graph.add_node(NodeKind::Agent);
        let y = graph.add_node(NodeKind::Parallel);
        graph.rename_node(&x.id, "X").unwrap();
        graph.rename_node(&y.id, "Y").unwrap();

        let export = WorkflowExport::from_graph(&graph, "workflow-test");

        assert_eq!(export.agents.len(), 1);
        assert_eq!(export.agents[0].name, "X");
        assert_eq!(export.agents[0].class, "AssistantAgent");
        assert_eq!(export.orchestration.agents, ["X", "Y"]);
    }

    #[test]
    fn export_json_shape_and_key_order() {
        let mut graph = NodeGraph::new();
        graph.add_node(NodeKind::Agent);
        let json = WorkflowExport::from_graph(&graph, "workflow-fixed")
            .to_json()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["schema_version"], "2.0");
        assert_eq!(value["workflow_id"], "workflow-fixed");
        assert_eq!(value["agents"][0]["name"], "new_agent_1");
        assert_eq!(value["agents"][0]["system_message"], "");
        assert_eq!(value["agents"][0]["llm_config"]["model"], "gpt-4");
        assert_eq!(value["agents"][0]["llm_config"]["temperature"], 0.3);
        assert_eq!(value["agents"][0]["tools"], serde_json::json!([]));
        assert_eq!(value["orchestration"]["type"], "Sequential");

        // Top-level keys serialize in declaration order
        let positions: Vec<usize> = ["schema_version", "workflow_id", "\"agents\"", "orchestration"]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
