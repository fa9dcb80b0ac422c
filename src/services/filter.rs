//! Filter view and total calculator
//!
//! The filter view is the subset of the store whose category contains the
//! search text, case-insensitively, in store order. The total always sums
//! the filter view, never the whole store.

use crate::models::{Expense, Money};

use super::store::ExpenseStore;

/// A search-filtered projection of an [`ExpenseStore`]
#[derive(Debug, Clone, Default)]
pub struct FilterView {
    search: String,
    needle: String,
    /// Store positions of the matching expenses
    members: Vec<usize>,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text as entered
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Change the search text and recompute membership
    pub fn set_search(&mut self, text: &str, store: &ExpenseStore) {
        self.search = text.to_string();
        self.needle = text.to_lowercase();
        self.refresh(store);
    }

    /// Recompute membership against the current store contents
    pub fn refresh(&mut self, store: &ExpenseStore) {
        self.members = store
            .expenses()
            .iter()
            .enumerate()
            .filter(|(_, expense)| expense.matches_category(&self.needle))
            .map(|(index, _)| index)
            .collect();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Matching expenses in store order
    pub fn visible<'s>(&'s self, store: &'s ExpenseStore) -> impl Iterator<Item = &'s Expense> + 's {
        let expenses = store.expenses();
        self.members.iter().filter_map(move |&index| expenses.get(index))
    }

    /// The expense shown at `row` (0-based) of the view
    pub fn row<'s>(&self, row: usize, store: &'s ExpenseStore) -> Option<&'s Expense> {
        self.members
            .get(row)
            .and_then(|&index| store.expenses().get(index))
    }

    /// Sum of the amounts in the view
    pub fn total(&self, store: &ExpenseStore) -> Money {
        self.visible(store).map(|expense| expense.amount).sum()
    }
}
