use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use workflow_composer::app::{App, Command};
use workflow_composer::ui::ui;
use workflow_composer_sdk::NodeKind;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Emit queued workflow documents now that stdout is ours again
    for doc in &app.pending_exports {
        println!("{}", doc);
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Short poll so expired notifications disappear without a keypress
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Bind physical keys to commands; all behavior lives behind `App::apply`
fn handle_key(app: &mut App, key: KeyEvent) {
    // Export preview overlay swallows input until closed
    if app.export_preview.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_export_preview(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_preview_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_preview_up(),
            _ => {}
        }
        return;
    }

    // Rename edit mode
    if app.is_editing {
        match key.code {
            KeyCode::Char(c) => app.edit_buffer.push(c),
            KeyCode::Backspace => {
                app.edit_buffer.pop();
            }
            KeyCode::Enter => app.save_rename(),
            KeyCode::Esc => app.cancel_rename(),
            _ => {}
        }
        return;
    }

    let command = match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => Command::Add(NodeKind::Agent),
        KeyCode::Char('g') | KeyCode::Char('G') => Command::Add(NodeKind::GroupChat),
        KeyCode::Char('s') | KeyCode::Char('S') => Command::Add(NodeKind::Sequential),
        KeyCode::Char('p') | KeyCode::Char('P') => Command::Add(NodeKind::Parallel),
        KeyCode::Char('d') | KeyCode::Char('D') => Command::Delete,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Rename,
        KeyCode::Char('c') | KeyCode::Char('C') => Command::Connect,
        KeyCode::Char('e') | KeyCode::Char('E') => Command::Export,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Down | KeyCode::Char('j') => Command::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => Command::CursorUp,
        KeyCode::Enter => Command::Select(app.cursor),
        KeyCode::Esc => Command::Deselect,
        _ => return,
    };

    app.apply(command);
}
