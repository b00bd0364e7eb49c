//! Graph rendering: node list, canvas and properties panes
//!
//! The `project_*` functions are pure projections of graph state into styled
//! lines; the `render_*` wrappers place them into widgets and layer UI-only
//! decoration (cursor, selection marker, edit prompt) on top. Kind colors
//! come exclusively from the catalog's color tag.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use workflow_composer_sdk::{NodeGraph, NodeKind};

use crate::app::App;

/// Shown in the list pane while the graph is empty
pub const EMPTY_LIST_PLACEHOLDER: &str = "No nodes yet.";

/// Shown in the canvas pane while the graph is empty
pub const EMPTY_CANVAS_MESSAGE: &str = "(empty workflow - press a/g/s/p to add nodes)";

/// Translate a catalog color tag into a terminal color
///
/// Unknown tags fall back to the default foreground; the tag itself is never
/// inspected anywhere else.
fn tag_color(tag: &str) -> Color {
    match tag {
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        _ => Color::White,
    }
}

fn kind_color(kind: NodeKind) -> Color {
    tag_color(kind.info().color_tag)
}

/// Compact list view: one line per node, `<label>: <name>`
pub fn project_list(graph: &NodeGraph) -> Vec<Line<'static>> {
    if graph.nodes.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_LIST_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    graph
        .nodes
        .iter()
        .map(|node| {
            let info = node.kind.info();
            Line::from(vec![
                Span::styled(
                    info.label.to_string(),
                    Style::default().fg(kind_color(node.kind)),
                ),
                Span::raw(": "),
                Span::raw(node.name.clone()),
            ])
        })
        .collect()
}

/// Diagram-style view: one line per node in insertion order, then the
/// connection list
///
/// A connection with a missing endpoint is skipped, not repaired; cascade
/// delete in the registry is expected to keep those from arising at all.
pub fn project_canvas(graph: &NodeGraph) -> Vec<Line<'static>> {
    if graph.nodes.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_CANVAS_MESSAGE,
                Style::default().fg(Color::DarkGray),
            )),
        ];
    }

    let mut lines: Vec<Line<'static>> = graph
        .nodes
        .iter()
        .map(|node| {
            let info = node.kind.info();
            Line::from(vec![
                Span::raw("  ● "),
                Span::styled(
                    node.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", info.label),
                    Style::default().fg(kind_color(node.kind)),
                ),
            ])
        })
        .collect();

    if !graph.connections.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Connections:",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )));
        for conn in &graph.connections {
            let (Some(from), Some(to)) = (graph.find_by_id(&conn.from), graph.find_by_id(&conn.to))
            else {
                continue;
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::raw(from.name.clone()),
                Span::styled(" → ", Style::default().fg(Color::Yellow)),
                Span::raw(to.name.clone()),
            ]));
        }
    }

    lines
}

/// Properties pane for the current selection
pub fn project_properties(graph: &NodeGraph) -> Vec<Line<'static>> {
    let Some(id) = graph.selected.as_deref() else {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                "No node selected.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Navigate with j/k and press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
    };

    // Stale selections cannot normally arise (delete cascades) but are
    // handled rather than trusted away.
    let Some(node) = graph.find_by_id(id) else {
        return vec![Line::from(Span::styled(
            "Selected node not found.",
            Style::default().fg(Color::Red),
        ))];
    };

    let info = node.kind.info();
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Gray)),
            Span::styled(
                node.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Kind: ", Style::default().fg(Color::Gray)),
            Span::styled(info.label.to_string(), Style::default().fg(kind_color(node.kind))),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            info.description.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R]", bold),
            Span::raw(" Rename  "),
            Span::styled("[C]", bold),
            Span::raw(" Connect  "),
            Span::styled("[D]", bold),
            Span::raw(" Delete  "),
            Span::styled("[Esc]", bold),
            Span::raw(" Deselect"),
        ]),
    ]
}

pub fn render_node_list(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Nodes ");
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let selected_id = app.graph.selected.clone();
    let items: Vec<ListItem> = project_list(&app.graph)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let is_selected = app
                .graph
                .nodes
                .get(i)
                .map(|n| Some(n.id.as_str()) == selected_id.as_deref())
                .unwrap_or(false);
            let under_cursor = !app.graph.nodes.is_empty() && i == app.cursor;
            let bullet = if under_cursor { "▶" } else { " " };

            let mut spans = vec![Span::raw(format!(" {} ", bullet))];
            if is_selected {
                spans.push(Span::styled("✱ ", Style::default().fg(Color::Yellow)));
            }
            spans.extend(line.spans);
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items), inner_area);
}

pub fn render_canvas(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.connect_from.is_some() {
        " Canvas (pick a target) "
    } else {
        " Canvas "
    };
    let paragraph = Paragraph::new(project_canvas(&app.graph))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

pub fn render_properties(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Properties ");
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = if app.is_editing {
        vec![
            Line::from(Span::styled("Rename node", bold)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}█", app.edit_buffer),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", bold),
                Span::raw(" Save  "),
                Span::styled("[Esc]", bold),
                Span::raw(" Cancel"),
            ]),
        ]
    } else {
        project_properties(&app.graph)
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
