//! Command dispatch for App
//!
//! Maps each discrete command onto the mutation method that implements it.

use super::{App, Command};

impl App {
    /// Process a single command
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Add(kind) => self.add_node(kind),
            Command::Delete => self.delete_selected(),
            Command::Select(index) => self.select_index(index),
            Command::Deselect => self.deselect(),
            Command::Connect => self.toggle_connect(),
            Command::Rename => self.start_rename(),
            Command::Export => self.export_workflow(),
            Command::CursorDown => self.cursor_next(),
            Command::CursorUp => self.cursor_previous(),
            Command::Quit => self.should_quit = true,
        }
    }
}
