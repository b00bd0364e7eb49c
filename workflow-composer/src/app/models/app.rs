//! Main application state

use workflow_composer_sdk::NodeGraph;

use crate::app::notifications::NotificationManager;

/// Main application state
pub struct App {
    /// The graph being composed; single owner of nodes and connections
    pub graph: NodeGraph,

    /// Cursor over the node list (display order = insertion order)
    pub cursor: usize,

    // Rename edit state
    pub is_editing: bool,
    pub edit_buffer: String,

    // Connection-in-progress state; holds the source node id while the user
    // picks a target
    pub connect_from: Option<String>,

    // Export state
    pub export_preview: Option<String>,
    pub export_scroll: u16,
    pub pending_exports: Vec<String>,

    pub notifications: NotificationManager,
    pub should_quit: bool,
}
