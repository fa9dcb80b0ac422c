//! Core data models for the expense manager
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its opaque handle, and the money amount type.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
