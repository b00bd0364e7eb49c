//! Notification rendering for user-visible feedback

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NotificationLevel};

const MAX_VISIBLE: usize = 2;

/// Render active notifications as an overlay at the bottom of the given area
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let notifications = app.notifications.get_active();
    if notifications.is_empty() {
        return;
    }

    let visible: Vec<_> = notifications
        .iter()
        .rev()
        .take(MAX_VISIBLE)
        .rev()
        .collect();

    let overlay_height = (visible.len() * 3) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(overlay_height)])
        .split(area);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            visible
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(chunks[1]);

    for (idx, notification) in visible.iter().enumerate() {
        let (color, icon) = match notification.level {
            NotificationLevel::Error => (Color::Red, "✗"),
            NotificationLevel::Warning => (Color::Yellow, "⚠"),
            NotificationLevel::Info => (Color::Blue, "ℹ"),
            NotificationLevel::Success => (Color::Green, "✓"),
        };

        let line = Line::from(format!(
            "{} {}: {}",
            icon, notification.title, notification.message
        ))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(ratatui::widgets::Clear, slots[idx]);
        f.render_widget(paragraph, slots[idx]);
    }
}
