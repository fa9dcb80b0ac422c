//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod settings;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use settings::{handle_theme_command, ThemeMode};
