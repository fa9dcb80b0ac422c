//! Expense model
//!
//! An expense is an amount paired with a free-text category label.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Process-local handle used for selection
    pub id: ExpenseId,

    /// Amount spent, always positive once validated
    pub amount: Money,

    /// Category label
    pub category: String,
}

impl Expense {
    /// Create a new expense with a fresh handle
    pub fn new(amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        Self::validate_fields(self.amount, &self.category)
    }

    /// Validate an amount and category before they become an expense
    pub fn validate_fields(amount: Money, category: &str) -> Result<(), ExpenseValidationError> {
        if category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if category.contains(['\n', '\r']) {
            return Err(ExpenseValidationError::MultilineCategory);
        }

        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        Ok(())
    }

    /// Case-insensitive substring match on the category; empty needle matches all
    pub fn matches_category(&self, needle: &str) -> bool {
        needle.is_empty() || self.category.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    MultilineCategory,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::MultilineCategory => write!(f, "Category cannot contain line breaks"),
            Self::NonPositiveAmount(_) => write!(f, "Amount must be greater than 0"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
