//! Cursor movement over the node list and export preview scrolling

use super::App;

impl App {
    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.graph.nodes.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn scroll_preview_down(&mut self) {
        if self.export_preview.is_some() {
            self.export_scroll = self.export_scroll.saturating_add(1);
        }
    }

    pub fn scroll_preview_up(&mut self) {
        self.export_scroll = self.export_scroll.saturating_sub(1);
    }
}
