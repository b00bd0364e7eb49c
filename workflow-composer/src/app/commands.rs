//! Command pattern for App communication
//!
//! This module defines the Command enum which represents all discrete named
//! inputs the key dispatch can send to the App. Each command is a direct
//! call-through to a graph or UI mutation; there is no batching or queuing.

use workflow_composer_sdk::NodeKind;

/// Commands produced by the key dispatch in `main`
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a node of the given kind
    Add(NodeKind),

    /// Delete the selected node (no-op without a selection)
    Delete,

    /// Select the node at a display index; completes a pending connection
    Select(usize),

    /// Clear the selection and cancel a pending connection
    Deselect,

    /// Start a connection from the selected node, or cancel one in progress
    Connect,

    /// Begin renaming the selected node
    Rename,

    /// Serialize the graph into a workflow document
    Export,

    /// Move the cursor down the node list
    CursorDown,

    /// Move the cursor up the node list
    CursorUp,

    /// Quit the application
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}
