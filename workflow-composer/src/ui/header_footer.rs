//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Workflow Composer v0.1.0",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("      "),
        Span::styled(
            format!(
                "{} nodes, {} connections",
                app.graph.nodes.len(),
                app.graph.connections.len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("      "),
        Span::styled("[Q]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("uit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let footer_text = if app.export_preview.is_some() {
        Line::from(vec![
            Span::styled("[↑↓/jk]", bold),
            Span::raw(" Scroll  "),
            Span::styled("[Esc/Enter]", bold),
            Span::raw(" Close preview"),
        ])
    } else if app.is_editing {
        Line::from(vec![
            Span::styled(
                "TYPE",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to edit  "),
            Span::styled("[Enter]", bold),
            Span::raw(" Save  "),
            Span::styled("[Esc]", bold),
            Span::raw(" Cancel  "),
            Span::styled("[Backspace]", bold),
            Span::raw(" Delete"),
        ])
    } else if app.connect_from.is_some() {
        Line::from(vec![
            Span::styled("[↑↓/jk]", bold),
            Span::raw(" Navigate  "),
            Span::styled("[Enter]", bold),
            Span::raw(" Connect to target  "),
            Span::styled("[C/Esc]", bold),
            Span::raw(" Cancel"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[A]", bold),
            Span::raw("gent "),
            Span::styled("[G]", bold),
            Span::raw("roup "),
            Span::styled("[S]", bold),
            Span::raw("eq "),
            Span::styled("[P]", bold),
            Span::raw("ar  "),
            Span::styled("[↑↓/jk]", bold),
            Span::raw(" Navigate  "),
            Span::styled("[Enter]", bold),
            Span::raw(" Select  "),
            Span::styled("[R]", bold),
            Span::raw(" Rename  "),
            Span::styled("[C]", bold),
            Span::raw(" Connect  "),
            Span::styled("[D]", bold),
            Span::raw(" Delete  "),
            Span::styled("[E]", bold),
            Span::raw(" Export  "),
            Span::styled("[Q]", bold),
            Span::raw(" Quit"),
        ])
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
