//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseError;
use crate::services::Session;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the default hook prints the panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// `startup_error` is the failure from loading the expense file, if any. It is
/// shown as the first alert; the records read before the failure can be
/// browsed, but writes are refused so the unread lines are not lost.
pub fn run_tui(
    session: &mut Session,
    settings: &mut Settings,
    paths: &ExpensePaths,
    startup_error: Option<ExpenseError>,
) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(session, settings, paths);
    if let Some(error) = &startup_error {
        app.read_only = true;
        app.show_error(error);
    }

    let events = EventHandler::default();

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Resize(_, _) => {}
            event => handle_event(app, event)?,
        }
    }
    Ok(())
}
