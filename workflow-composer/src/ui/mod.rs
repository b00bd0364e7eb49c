//! UI rendering for the workflow composer TUI
//!
//! One screen, three panes: the node list, the canvas and the properties
//! panel, with header/footer chrome and overlays for export previews and
//! notifications.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

// Module declarations
mod components;
mod graph_views;
mod header_footer;
mod notifications;

// Re-export public functions
pub use components::{centered_rect, render_export_preview};
pub use graph_views::{
    project_canvas, project_list, project_properties, render_canvas, render_node_list,
    render_properties, EMPTY_CANVAS_MESSAGE, EMPTY_LIST_PLACEHOLDER,
};
pub use header_footer::{render_footer, render_header};
pub use notifications::render_notifications;

/// Main UI rendering function - orchestrates all pane rendering
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(chunks[1]);

    render_node_list(f, panes[0], app);
    render_canvas(f, panes[1], app);
    render_properties(f, panes[2], app);

    render_footer(f, chunks[2], app);

    // Export preview overlay
    if app.export_preview.is_some() {
        render_export_preview(f, f.area(), app);
    }

    // Notification overlay
    render_notifications(f, app, chunks[1]);
}
