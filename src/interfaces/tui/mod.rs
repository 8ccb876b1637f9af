//! Terminal User Interface (TUI) module
//!
//! One screen: the link-shortening form. The event loop polls input with a
//! short timeout so the timed button revert and completed HTTP work get
//! applied even while the keyboard is idle.

use std::io;
use std::time::Instant;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub mod app;
mod clipboard;
pub mod constants;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

use crate::config::AppConfig;

/// Run the TUI application
pub async fn run_tui(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events, falling through on tick timeout
        if event::poll(constants::TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event_handler::handle_key_event(app, key) {
                        return Ok(());
                    }
                }
                Event::Paste(text) => app.paste_text(&text),
                _ => {}
            }
        }

        app.drain_api_events();
        app.tick(Instant::now());
    }
}
