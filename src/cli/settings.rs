//! Theme CLI command
//!
//! Shows, sets or toggles the theme and persists it to the settings file.

use clap::ValueEnum;

use crate::audit::EntityType;
use crate::config::{ExpensePaths, Settings, Theme};
use crate::error::ExpenseResult;
use crate::services::Session;

/// Requested theme change
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
    Toggle,
}

/// Handle the theme command; `None` just prints the current theme
pub fn handle_theme_command(
    session: &mut Session,
    settings: &mut Settings,
    paths: &ExpensePaths,
    mode: Option<ThemeMode>,
) -> ExpenseResult<()> {
    let Some(mode) = mode else {
        println!("Current theme: {}", session.theme());
        return Ok(());
    };

    let before = settings.clone();
    let theme = match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Toggle => session.theme().toggled(),
    };

    session.set_theme(theme);
    settings.theme = theme;
    settings.save(paths)?;

    if before.theme != theme {
        session.store().storage().log_update(
            EntityType::Settings,
            "theme".to_string(),
            None,
            &before,
            &*settings,
            Some(format!("theme: {} -> {}", before.theme, theme)),
        )?;
    }

    println!("Theme set to {}", theme);
    Ok(())
}
