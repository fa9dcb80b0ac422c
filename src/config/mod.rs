//! Configuration module for the expense manager
//!
//! This module provides configuration management including:
//! - Platform path resolution for settings, audit log and the expense file
//! - User settings persistence (theme, currency symbol, data file override)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::{Settings, Theme};
