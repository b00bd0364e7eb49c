//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by domain.

use workflow_composer_sdk::NodeGraph;

mod models;
pub use models::*;

// Declare submodules
mod command_handlers;
mod commands;
mod graph_ops;
mod navigation;
pub mod notifications;

pub use commands::{Command, NotificationLevel};
pub use notifications::{Notification, NotificationManager};

impl App {
    pub fn new() -> Self {
        Self {
            graph: NodeGraph::new(),
            cursor: 0,
            is_editing: false,
            edit_buffer: String::new(),
            connect_from: None,
            export_preview: None,
            export_scroll: 0,
            pending_exports: Vec::new(),
            notifications: NotificationManager::new(),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
