//! Expense Manager - track expenses in a plain text file
//!
//! This library provides the core functionality for the expense manager:
//! add, edit and delete expenses, search them by category, and keep a
//! running total of what is shown. Expenses are stored one per line as
//! `amount,category`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense, id, money)
//! - `storage`: Expense file codec and atomic writes
//! - `services`: Store, filter view and session
//! - `audit`: Audit logging system
//! - `cli`: Command handlers
//! - `display`: Terminal output formatting
//! - `tui`: Interactive interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_manager::config::{ExpensePaths, Settings};
//! use expense_manager::services::{ExpenseStore, Session};
//! use expense_manager::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(settings.expense_file(&paths, None), paths.audit_log());
//! let mut session = Session::new(ExpenseStore::new(storage), settings.theme);
//! session.load()?;
//! session.add("12.50", "Food")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
