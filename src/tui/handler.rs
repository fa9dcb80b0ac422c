//! Event handler for the TUI
//!
//! Routes key presses to [`App`] actions based on the focused element.
//! While an alert is open, keys only dismiss it.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return Ok(());
    }

    // Keys that work regardless of focus
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('s') => app.update_expense(),
            KeyCode::Char('t') => app.toggle_theme(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Ok(());
        }
        KeyCode::Esc => {
            if app.focus == Focus::Table {
                app.clear_selection();
            } else {
                app.focus = Focus::Table;
            }
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Table => handle_table_key(app, key),
        Focus::Amount | Focus::Category => handle_form_key(app, key),
        Focus::Search => handle_search_key(app, key),
    }

    Ok(())
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home | KeyCode::Char('g') => app.table_row = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.table_row = app.session.visible_len().saturating_sub(1)
        }
        KeyCode::Enter | KeyCode::Char('s') => app.select_highlighted(),
        KeyCode::Char('a') => app.focus = Focus::Amount,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('u') => app.update_expense(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_expense(),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.add_expense();
        return;
    }
    edit_focused_input(app, key);
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.focus = Focus::Table;
        return;
    }
    if edit_focused_input(app, key) {
        app.search_changed();
    }
}

/// Apply an editing key to the focused field; returns whether the text changed
fn edit_focused_input(app: &mut App, key: KeyEvent) -> bool {
    let Some(input) = app.focused_input() else {
        return false;
    };

    match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}
