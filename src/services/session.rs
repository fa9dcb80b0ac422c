//! Expense session
//!
//! A session bundles the store, its filter view and the active theme, and is
//! what both the CLI and the TUI drive. Every intent that changes the store
//! or the search text refreshes the filter view before returning, whether or
//! not the intent succeeded.

use crate::config::Theme;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};

use super::filter::FilterView;
use super::store::ExpenseStore;

/// The store plus its derived views
pub struct Session {
    store: ExpenseStore,
    filter: FilterView,
    theme: Theme,
}

impl Session {
    /// Create a session over `store`; the filter starts empty (matches all)
    pub fn new(store: ExpenseStore, theme: Theme) -> Self {
        let mut filter = FilterView::new();
        filter.refresh(&store);
        Self {
            store,
            filter,
            theme,
        }
    }

    /// Load the expense file into the store
    ///
    /// Records read before a malformed line stay visible even when an error
    /// is returned.
    pub fn load(&mut self) -> ExpenseResult<()> {
        let result = self.store.load();
        self.refresh();
        result
    }

    fn refresh(&mut self) {
        self.filter.refresh(&self.store);
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch between the light and dark theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Add an expense from the amount and category field text
    pub fn add(&mut self, amount_text: &str, category: &str) -> ExpenseResult<ExpenseId> {
        let result = self.store.add_raw(amount_text, category);
        self.refresh();
        result
    }

    /// Update the selected expense from field text
    pub fn update(&mut self, amount_text: &str, category: &str) -> ExpenseResult<Expense> {
        let result = self.store.update_raw(amount_text, category).map(Expense::clone);
        self.refresh();
        result
    }

    /// Delete the selected expense
    pub fn delete(&mut self) -> ExpenseResult<Expense> {
        let result = self.store.delete();
        self.refresh();
        result
    }

    /// Select an expense by handle
    pub fn select(&mut self, id: ExpenseId) -> ExpenseResult<&Expense> {
        self.store.select(id)
    }

    /// Select the expense shown at `row` (0-based) of the filter view
    pub fn select_row(&mut self, row: usize) -> ExpenseResult<&Expense> {
        let id = self
            .filter
            .row(row, &self.store)
            .map(|expense| expense.id)
            .ok_or_else(|| ExpenseError::expense_not_found(format!("row {}", row + 1)))?;
        self.store.select(id)
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    pub fn selected(&self) -> Option<&Expense> {
        self.store.selected()
    }

    /// Change the search text
    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text, &self.store);
    }

    pub fn search(&self) -> &str {
        self.filter.search()
    }

    /// Expenses in the filter view, in store order
    pub fn visible(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.filter.visible(&self.store)
    }

    pub fn visible_len(&self) -> usize {
        self.filter.len()
    }

    /// Position of `id` within the filter view
    pub fn row_of(&self, id: ExpenseId) -> Option<usize> {
        self.visible().position(|expense| expense.id == id)
    }

    /// Sum of the amounts in the filter view
    pub fn total(&self) -> Money {
        self.filter.total(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_session() -> (Session, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::without_audit(temp_dir.path().join("expenses.txt"));
        let session = Session::new(ExpenseStore::new(storage), Theme::Light);
        (session, temp_dir)
    }

    #[test]
    fn test_add_refreshes_view_and_total() {
        let (mut session, _temp) = create_test_session();
        session.set_search("food");

        session.add("10", "Food").unwrap();
        session.add("5", "Travel").unwrap();
        session.add("20", "Fast Food").unwrap();

        assert_eq!(session.store().len(), 3);
        assert_eq!(session.visible_len(), 2);
        assert_eq!(session.total(), Money::from_units(30));
    }

    #[test]
    fn test_failed_add_leaves_view_unchanged() {
        let (mut session, _temp) = create_test_session();
        session.add("12.5", "Rent").unwrap();

        assert!(session.add("3", "").is_err());
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.total(), Money::from_cents(1250));
    }

    #[test]
    fn test_select_row_uses_filtered_positions() {
        let (mut session, _temp) = create_test_session();
        session.add("10", "Food").unwrap();
        session.add("5", "Travel").unwrap();
        session.add("20", "Fast Food").unwrap();
        session.set_search("food");

        let selected = session.select_row(1).unwrap();
        assert_eq!(selected.category, "Fast Food");

        session.update("25", "Fast Food").unwrap();
        assert_eq!(session.total(), Money::from_units(35));
    }

    #[test]
    fn test_select_row_out_of_range() {
        let (mut session, _temp) = create_test_session();
        session.add("10", "Food").unwrap();

        assert!(session.select_row(4).unwrap_err().is_not_found());
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_update_can_move_record_out_of_view() {
        let (mut session, _temp) = create_test_session();
        session.add("10", "Food").unwrap();
        session.set_search("food");

        session.select_row(0).unwrap();
        session.update("10", "Groceries").unwrap();

        assert!(session.visible_len() == 0);
        assert_eq!(session.total(), Money::zero());
    }

    #[test]
    fn test_delete_without_selection() {
        let (mut session, _temp) = create_test_session();
        session.add("10", "Food").unwrap();

        let err = session.delete().unwrap_err();
        assert!(matches!(err, ExpenseError::NoSelection(_)));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_delete_refreshes_total() {
        let (mut session, _temp) = create_test_session();
        session.add("10", "Food").unwrap();
        let travel = session.add("5", "Travel").unwrap();

        assert_eq!(session.row_of(travel), Some(1));
        session.select(travel).unwrap();
        session.delete().unwrap();

        assert_eq!(session.total(), Money::from_units(10));
        assert_eq!(session.row_of(travel), None);
    }

    #[test]
    fn test_load_keeps_partial_records_visible() {
        let (mut session, temp) = create_test_session();
        std::fs::write(temp.path().join("expenses.txt"), "10,Food\nbroken\n").unwrap();

        assert!(session.load().is_err());
        assert_eq!(session.visible_len(), 1);
        assert_eq!(session.total(), Money::from_units(10));
    }

    #[test]
    fn test_toggle_theme() {
        let (mut session, _temp) = create_test_session();
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
    }
}
