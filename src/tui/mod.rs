//! Terminal User Interface module
//!
//! A single screen: amount and category form, search bar, the filtered
//! expense table with its total, and a light/dark theme toggle.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub mod layout;
pub mod theme;

pub use app::App;
pub use terminal::run_tui;
