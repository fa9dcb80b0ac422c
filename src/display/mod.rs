//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, totals and audit history for
//! the command-line interface.

pub mod expense;

pub use expense::{format_expense_details, format_expense_table, format_history, format_total};
