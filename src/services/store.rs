//! Expense store
//!
//! Holds the ordered in-memory expense list, the current selection, and keeps
//! the expense file in sync: every successful add, update or delete is
//! followed by a full rewrite of the file.

use crate::audit::{generate_diff, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// The file-backed collection of expenses
pub struct ExpenseStore {
    storage: Storage,
    expenses: Vec<Expense>,
    selected: Option<ExpenseId>,
}

impl ExpenseStore {
    /// Create an empty store backed by `storage`; call [`load`](Self::load) to read the file
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            expenses: Vec::new(),
            selected: None,
        }
    }

    /// Replace the in-memory list with the contents of the expense file
    ///
    /// On a malformed line the records before it remain loaded and the
    /// `FileFormat` error is returned.
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.expenses.clear();
        self.selected = None;
        self.storage.expenses.load_into(&mut self.expenses)
    }

    /// Overwrite the expense file with the current list
    pub fn save(&self) -> ExpenseResult<()> {
        self.storage.expenses.save(&self.expenses)
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Add an expense from validated values
    pub fn add(&mut self, amount: Money, category: &str) -> ExpenseResult<ExpenseId> {
        let category = category.trim();
        Expense::validate_fields(amount, category)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = Expense::new(amount, category);
        let id = expense.id;
        self.expenses.push(expense.clone());
        self.save()?;

        self.storage.log_create(
            EntityType::Expense,
            id.to_string(),
            Some(expense.category.clone()),
            &expense,
        )?;

        Ok(id)
    }

    /// Add an expense from the raw amount and category field text
    pub fn add_raw(&mut self, amount_text: &str, category: &str) -> ExpenseResult<ExpenseId> {
        let amount = parse_fields(amount_text, category)?;
        self.add(amount, category)
    }

    /// Select an expense for a later update or delete
    pub fn select(&mut self, id: ExpenseId) -> ExpenseResult<&Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.selected = Some(id);
        Ok(&self.expenses[index])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected expense, if it still exists
    pub fn selected(&self) -> Option<&Expense> {
        self.selected.and_then(|id| self.get(id))
    }

    fn selected_index(&self, action: &str) -> ExpenseResult<usize> {
        self.selected
            .and_then(|id| self.position(id))
            .ok_or_else(|| ExpenseError::NoSelection(format!("Select an expense to {}", action)))
    }

    /// Update the selected expense in place
    ///
    /// The selection is cleared once the update is applied.
    pub fn update(&mut self, amount: Money, category: &str) -> ExpenseResult<&Expense> {
        let index = self.selected_index("update")?;
        let category = category.trim();
        Expense::validate_fields(amount, category)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let before = self.expenses[index].clone();
        {
            let expense = &mut self.expenses[index];
            expense.amount = amount;
            expense.category = category.to_string();
        }
        self.selected = None;
        self.save()?;

        let after = &self.expenses[index];
        let diff = match (serde_json::to_value(&before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.storage.log_update(
            EntityType::Expense,
            after.id.to_string(),
            Some(after.category.clone()),
            &before,
            after,
            diff,
        )?;

        Ok(&self.expenses[index])
    }

    /// Update the selected expense from raw field text
    pub fn update_raw(&mut self, amount_text: &str, category: &str) -> ExpenseResult<&Expense> {
        self.selected_index("update")?;
        let amount = parse_fields(amount_text, category)?;
        self.update(amount, category)
    }

    /// Remove the selected expense
    pub fn delete(&mut self) -> ExpenseResult<Expense> {
        let index = self.selected_index("delete")?;

        let removed = self.expenses.remove(index);
        self.selected = None;
        self.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.category.clone()),
            &removed,
        )?;

        Ok(removed)
    }
}

/// Check both input fields are filled and the amount is a number
fn parse_fields(amount_text: &str, category: &str) -> ExpenseResult<Money> {
    if amount_text.trim().is_empty() || category.trim().is_empty() {
        return Err(ExpenseError::Validation("Please fill all fields".into()));
    }

    Money::parse(amount_text).map_err(|e| ExpenseError::NumberFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (ExpenseStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(
            temp_dir.path().join("expenses.txt"),
            temp_dir.path().join("audit.log"),
        );
        (ExpenseStore::new(storage), temp_dir)
    }

    fn file_contents(temp_dir: &TempDir) -> String {
        std::fs::read_to_string(temp_dir.path().join("expenses.txt")).unwrap_or_default()
    }

    #[test]
    fn test_add_appends_and_saves() {
        let (mut store, temp) = create_test_store();

        store.add(Money::from_units(10), "Food").unwrap();
        store.add(Money::from_cents(550), "Travel").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(file_contents(&temp), "10.00,Food\n5.50,Travel\n");
    }

    #[test]
    fn test_add_rejects_invalid_values() {
        let (mut store, temp) = create_test_store();

        let err = store.add(Money::zero(), "Food").unwrap_err();
        assert!(err.is_validation());
        let err = store.add(Money::from_units(-5), "Food").unwrap_err();
        assert!(err.is_validation());
        let err = store.add(Money::from_units(5), "").unwrap_err();
        assert!(err.is_validation());

        assert!(store.is_empty());
        assert!(!temp.path().join("expenses.txt").exists());
    }

    #[test]
    fn test_rent_then_empty_category() {
        let (mut store, _temp) = create_test_store();

        store.add_raw("12.5", "Rent").unwrap();
        let err = store.add_raw("3", "").unwrap_err();

        assert!(matches!(err, ExpenseError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_raw_number_format() {
        let (mut store, _temp) = create_test_store();

        let err = store.add_raw("ten", "Food").unwrap_err();
        assert!(matches!(err, ExpenseError::NumberFormat(_)));
        assert_eq!(err.title(), "Invalid Input");
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_raw_empty_fields() {
        let (mut store, _temp) = create_test_store();

        let err = store.add_raw("", "Food").unwrap_err();
        assert_eq!(err.message(), "Please fill all fields");
    }

    #[test]
    fn test_update_requires_selection() {
        let (mut store, _temp) = create_test_store();
        store.add(Money::from_units(10), "Food").unwrap();

        let err = store.update(Money::from_units(20), "Food").unwrap_err();
        assert!(matches!(err, ExpenseError::NoSelection(_)));
        assert_eq!(store.expenses()[0].amount, Money::from_units(10));
    }

    #[test]
    fn test_update_in_place() {
        let (mut store, temp) = create_test_store();
        store.add(Money::from_units(10), "Food").unwrap();
        let id = store.add(Money::from_units(5), "Travel").unwrap();

        store.select(id).unwrap();
        let updated = store.update(Money::from_units(7), "Train").unwrap();
        assert_eq!(updated.id, id);

        assert_eq!(store.expenses()[1].category, "Train");
        assert!(store.selected().is_none());
        assert_eq!(file_contents(&temp), "10.00,Food\n7.00,Train\n");
    }

    #[test]
    fn test_update_validation_keeps_record_and_selection() {
        let (mut store, _temp) = create_test_store();
        let id = store.add(Money::from_units(10), "Food").unwrap();
        store.select(id).unwrap();

        let err = store.update_raw("0", "Food").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get(id).unwrap().amount, Money::from_units(10));
        assert_eq!(store.selected().map(|e| e.id), Some(id));
    }

    #[test]
    fn test_update_raw_without_selection_reports_selection_first() {
        let (mut store, _temp) = create_test_store();

        let err = store.update_raw("abc", "").unwrap_err();
        assert!(matches!(err, ExpenseError::NoSelection(_)));
    }

    #[test]
    fn test_delete_requires_selection() {
        let (mut store, _temp) = create_test_store();
        store.add(Money::from_units(10), "Food").unwrap();

        let err = store.delete().unwrap_err();
        assert!(matches!(err, ExpenseError::NoSelection(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_selected() {
        let (mut store, temp) = create_test_store();
        let food = store.add(Money::from_units(10), "Food").unwrap();
        store.add(Money::from_units(5), "Travel").unwrap();

        store.select(food).unwrap();
        let removed = store.delete().unwrap();

        assert_eq!(removed.category, "Food");
        assert_eq!(store.len(), 1);
        assert_eq!(file_contents(&temp), "5.00,Travel\n");

        // The deleted handle can no longer be selected
        assert!(store.select(food).unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_round_trip() {
        let (mut store, temp) = create_test_store();
        store.add(Money::from_units(10), "Food").unwrap();
        store.add(Money::from_cents(1250), "Rent").unwrap();

        let storage = Storage::without_audit(temp.path().join("expenses.txt"));
        let mut reloaded = ExpenseStore::new(storage);
        reloaded.load().unwrap();

        let pairs: Vec<_> = reloaded
            .expenses()
            .iter()
            .map(|e| (e.amount, e.category.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(Money::from_units(10), "Food"), (Money::from_cents(1250), "Rent")]
        );
    }

    #[test]
    fn test_load_partial_on_bad_line() {
        let (mut store, temp) = create_test_store();
        std::fs::write(temp.path().join("expenses.txt"), "1,A\n2,B\nxyz\n4,D\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ExpenseError::FileFormat { line: 3, .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_mutations_are_audited() {
        let (mut store, _temp) = create_test_store();
        let id = store.add(Money::from_units(10), "Food").unwrap();
        store.select(id).unwrap();
        store.update(Money::from_units(12), "Food").unwrap();
        store.select(id).unwrap();
        store.delete().unwrap();

        let entries = store.storage().audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[1].changes.as_deref(),
            Some("amount: \"10.00\" -> \"12.00\"")
        );
    }

    #[test]
    fn test_save_failure_keeps_mutation() {
        let temp = TempDir::new().unwrap();
        // The expense "file" is a directory, so every save fails
        let storage = Storage::without_audit(temp.path().to_path_buf());
        let mut store = ExpenseStore::new(storage);

        let err = store.add(Money::from_units(3), "Tea").unwrap_err();
        assert!(matches!(err, ExpenseError::FileIo(_)));
        assert_eq!(store.len(), 1);
    }
}
