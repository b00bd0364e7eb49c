//! Graph mutation methods driven by user commands

use chrono::Local;
use uuid::Uuid;
use workflow_composer_sdk::{GraphError, NodeKind, WorkflowExport};

use super::App;

impl App {
    /// Append a new node and move the cursor onto it
    pub fn add_node(&mut self, kind: NodeKind) {
        let node = self.graph.add_node(kind);
        self.cursor = self.graph.nodes.len() - 1;
        self.notifications.success(
            "Node added",
            format!("{}: {}", kind.info().label, node.name),
        );
    }

    /// Delete the selected node; without a selection this is a no-op
    pub fn delete_selected(&mut self) {
        let Some(id) = self.graph.selected.clone() else {
            self.notifications
                .warning("Nothing to delete", "Select a node first (Enter)");
            return;
        };

        let name = self
            .graph
            .find_by_id(&id)
            .map(|n| n.name.clone())
            .unwrap_or_default();
        self.graph.delete_node(&id);

        if self.connect_from.as_deref() == Some(id.as_str()) {
            self.connect_from = None;
        }
        self.clamp_cursor();
        self.notifications.info("Node deleted", name);
    }

    /// Select the node at a display index; completes a pending connection if
    /// one was started
    pub fn select_index(&mut self, index: usize) {
        let Some(id) = self.graph.nodes.get(index).map(|n| n.id.clone()) else {
            self.notifications
                .warning("No such node", format!("index {} is out of range", index));
            return;
        };

        if let Err(err) = self.graph.select(&id) {
            self.report(err);
            return;
        }

        if let Some(from) = self.connect_from.take() {
            match self.graph.connect(&from, &id) {
                Ok(()) => {
                    let from_name = self.node_name(&from);
                    let to_name = self.node_name(&id);
                    self.notifications
                        .success("Connected", format!("{} → {}", from_name, to_name));
                }
                Err(err) => self.report(err),
            }
        }
    }

    /// Clear the selection; also cancels a pending connection
    pub fn deselect(&mut self) {
        self.graph.deselect();
        self.connect_from = None;
    }

    /// Start a connection from the selected node, or cancel one in progress
    pub fn toggle_connect(&mut self) {
        if self.connect_from.take().is_some() {
            self.notifications
                .info("Connection cancelled", "No edge was added");
            return;
        }

        match self.graph.selected.clone() {
            Some(id) => {
                self.connect_from = Some(id);
                self.notifications
                    .info("Connecting", "Select the target node (Enter)");
            }
            None => self
                .notifications
                .warning("Cannot connect", "Select a source node first"),
        }
    }

    /// Enter rename mode for the selected node
    pub fn start_rename(&mut self) {
        match self.graph.selected_node() {
            Some(node) => {
                self.edit_buffer = node.name.clone();
                self.is_editing = true;
            }
            None => self
                .notifications
                .warning("Cannot rename", "Select a node first"),
        }
    }

    /// Commit the edit buffer as the selected node's new name
    pub fn save_rename(&mut self) {
        self.is_editing = false;
        let name = std::mem::take(&mut self.edit_buffer);

        let Some(id) = self.graph.selected.clone() else {
            return;
        };
        if name.is_empty() {
            self.notifications
                .warning("Name unchanged", "Empty names are not allowed");
            return;
        }
        if let Err(err) = self.graph.rename_node(&id, name) {
            self.report(err);
        }
    }

    /// Leave rename mode without touching the graph
    pub fn cancel_rename(&mut self) {
        self.is_editing = false;
        self.edit_buffer.clear();
    }

    /// Serialize the current graph into a workflow document
    ///
    /// The document is complete at the moment this runs: it is shown in the
    /// preview overlay and queued so `main` can print it to stdout once the
    /// terminal is restored.
    pub fn export_workflow(&mut self) {
        let workflow_id = format!("workflow-{}", Uuid::new_v4());
        let export = WorkflowExport::from_graph(&self.graph, workflow_id);

        match export.to_json() {
            Ok(json) => {
                self.pending_exports.push(json.clone());
                self.export_preview = Some(json);
                self.export_scroll = 0;
                self.notifications.success(
                    "Workflow exported",
                    format!(
                        "{} at {} (printed on exit)",
                        export.workflow_id,
                        Local::now().format("%H:%M:%S")
                    ),
                );
            }
            Err(err) => self.notifications.error("Export failed", err.to_string()),
        }
    }

    pub fn close_export_preview(&mut self) {
        self.export_preview = None;
        self.export_scroll = 0;
    }

    fn report(&mut self, err: GraphError) {
        self.notifications.error("Graph error", err.to_string());
    }

    fn node_name(&self, id: &str) -> String {
        self.graph
            .find_by_id(id)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.graph.nodes.len() {
            self.cursor = self.graph.nodes.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_nodes(kinds: &[NodeKind]) -> App {
        let mut app = App::new();
        for kind in kinds {
            app.add_node(*kind);
        }
        app
    }

    #[test]
    fn add_moves_cursor_to_new_node() {
        let app = app_with_nodes(&[NodeKind::Agent, NodeKind::Parallel]);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.graph.nodes.len(), 2);
    }

    #[test]
    fn delete_without_selection_is_noop() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.delete_selected();
        assert_eq!(app.graph.nodes.len(), 1);
    }

    #[test]
    fn delete_selected_removes_node_and_clamps_cursor() {
        let mut app = app_with_nodes(&[NodeKind::Agent, NodeKind::Sequential]);
        app.select_index(1);
        app.delete_selected();

        assert_eq!(app.graph.nodes.len(), 1);
        assert_eq!(app.graph.selected, None);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn select_out_of_range_leaves_selection_alone() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.select_index(0);
        app.select_index(5);
        assert_eq!(app.graph.selected.as_deref(), Some("node-1"));
    }

    #[test]
    fn connect_flow_creates_edge() {
        let mut app = app_with_nodes(&[NodeKind::Agent, NodeKind::GroupChat]);
        app.select_index(0);
        app.toggle_connect();
        assert!(app.connect_from.is_some());

        app.select_index(1);
        assert_eq!(app.connect_from, None);
        assert_eq!(app.graph.connections.len(), 1);
        assert_eq!(app.graph.connections[0].from, "node-1");
        assert_eq!(app.graph.connections[0].to, "node-2");
    }

    #[test]
    fn connect_is_cancelled_by_second_press() {
        let mut app = app_with_nodes(&[NodeKind::Agent, NodeKind::GroupChat]);
        app.select_index(0);
        app.toggle_connect();
        app.toggle_connect();

        app.select_index(1);
        assert!(app.graph.connections.is_empty());
    }

    #[test]
    fn connect_without_selection_does_not_arm() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.toggle_connect();
        assert_eq!(app.connect_from, None);
    }

    #[test]
    fn deleting_pending_source_cancels_connection() {
        let mut app = app_with_nodes(&[NodeKind::Agent, NodeKind::GroupChat]);
        app.select_index(0);
        app.toggle_connect();
        app.delete_selected();

        assert_eq!(app.connect_from, None);
        app.select_index(0);
        assert!(app.graph.connections.is_empty());
    }

    #[test]
    fn rename_flow_updates_name() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.select_index(0);
        app.start_rename();
        assert!(app.is_editing);
        assert_eq!(app.edit_buffer, "new_agent_1");

        app.edit_buffer = "researcher".to_string();
        app.save_rename();

        assert!(!app.is_editing);
        assert_eq!(app.graph.nodes[0].name, "researcher");
    }

    #[test]
    fn rename_cancel_keeps_old_name() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.select_index(0);
        app.start_rename();
        app.edit_buffer = "scratch".to_string();
        app.cancel_rename();

        assert!(!app.is_editing);
        assert_eq!(app.graph.nodes[0].name, "new_agent_1");
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn rename_without_selection_stays_in_normal_mode() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.start_rename();
        assert!(!app.is_editing);
    }

    #[test]
    fn export_queues_a_parseable_document() {
        let mut app = app_with_nodes(&[NodeKind::Agent, NodeKind::Parallel]);
        app.export_workflow();

        assert_eq!(app.pending_exports.len(), 1);
        assert!(app.export_preview.is_some());

        let value: serde_json::Value = serde_json::from_str(&app.pending_exports[0]).unwrap();
        assert_eq!(value["schema_version"], "2.0");
        assert_eq!(value["agents"].as_array().unwrap().len(), 1);
        assert_eq!(value["orchestration"]["agents"].as_array().unwrap().len(), 2);
        assert!(value["workflow_id"]
            .as_str()
            .unwrap()
            .starts_with("workflow-"));
    }

    #[test]
    fn exports_get_distinct_workflow_ids() {
        let mut app = app_with_nodes(&[NodeKind::Agent]);
        app.export_workflow();
        app.close_export_preview();
        app.export_workflow();

        let ids: Vec<serde_json::Value> = app
            .pending_exports
            .iter()
            .map(|doc| serde_json::from_str::<serde_json::Value>(doc).unwrap()["workflow_id"].clone())
            .collect();
        assert_ne!(ids[0], ids[1]);
    }
}
