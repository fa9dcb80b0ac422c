//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Each user intent is one method here; failures become an [`Alert`].

use crate::audit::EntityType;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseError;
use crate::services::Session;

use super::theme::Palette;
use super::widgets::{Alert, TextInput};

/// Which element currently receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Amount,
    Category,
    Search,
}

impl Focus {
    /// Next element in Tab order
    pub fn next(self) -> Self {
        match self {
            Self::Table => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Search,
            Self::Search => Self::Table,
        }
    }

    /// Previous element in Tab order
    pub fn prev(self) -> Self {
        match self {
            Self::Table => Self::Search,
            Self::Amount => Self::Table,
            Self::Category => Self::Amount,
            Self::Search => Self::Category,
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub session: &'a mut Session,
    pub settings: &'a mut Settings,
    pub paths: &'a ExpensePaths,

    pub should_quit: bool,
    pub focus: Focus,

    pub amount_input: TextInput,
    pub category_input: TextInput,
    pub search_input: TextInput,

    /// Highlighted row in the filter view
    pub table_row: usize,

    /// Blocking alert; key presses only dismiss it while it is open
    pub alert: Option<Alert>,

    pub status_message: Option<String>,

    /// Set when the expense file only partly loaded; saving would drop the
    /// lines that were not read
    pub read_only: bool,
}

impl<'a> App<'a> {
    pub fn new(session: &'a mut Session, settings: &'a mut Settings, paths: &'a ExpensePaths) -> Self {
        let mut search_input = TextInput::new();
        search_input.set(session.search());

        Self {
            session,
            settings,
            paths,
            should_quit: false,
            focus: Focus::default(),
            amount_input: TextInput::new(),
            category_input: TextInput::new(),
            search_input,
            table_row: 0,
            alert: None,
            status_message: None,
            read_only: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.session.theme())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Show an error as a blocking alert
    pub fn show_error(&mut self, error: &ExpenseError) {
        self.alert = Some(Alert::from_error(error));
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// The input field that has focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Amount => Some(&mut self.amount_input),
            Focus::Category => Some(&mut self.category_input),
            Focus::Search => Some(&mut self.search_input),
            Focus::Table => None,
        }
    }

    pub fn move_down(&mut self) {
        let len = self.session.visible_len();
        if len > 0 && self.table_row + 1 < len {
            self.table_row += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.table_row = self.table_row.saturating_sub(1);
    }

    /// Keep the highlight inside the filter view after it shrinks
    pub fn clamp_row(&mut self) {
        let len = self.session.visible_len();
        if len == 0 {
            self.table_row = 0;
        } else if self.table_row >= len {
            self.table_row = len - 1;
        }
    }

    /// Show why writes are blocked; returns true when they are
    fn refuse_write(&mut self) -> bool {
        if self.read_only {
            self.alert = Some(
                Alert::new(
                    "Read Only",
                    "The expense file did not load completely, so changes are disabled",
                )
                .with_hint("Fix the file and restart to add, update or delete"),
            );
        }
        self.read_only
    }

    fn clear_form(&mut self) {
        self.amount_input.clear();
        self.category_input.clear();
    }

    /// Select the highlighted expense and copy it into the form
    pub fn select_highlighted(&mut self) {
        match self.session.select_row(self.table_row) {
            Ok(expense) => {
                let amount = expense.amount.to_string();
                let category = expense.category.clone();
                self.amount_input.set(amount);
                self.category_input.set(category.clone());
                self.set_status(format!("Selected '{}': edit the fields, then Ctrl+S to update", category));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Drop the selection and empty the form
    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
        self.clear_form();
        self.status_message = None;
    }

    /// Add an expense from the form fields
    pub fn add_expense(&mut self) {
        if self.refuse_write() {
            return;
        }
        let result = self
            .session
            .add(self.amount_input.value(), self.category_input.value());

        match result {
            Ok(id) => {
                if let Some(row) = self.session.row_of(id) {
                    self.table_row = row;
                }
                self.clear_form();
                self.set_status("Expense added");
            }
            Err(e) => self.show_error(&e),
        }
        self.clamp_row();
    }

    /// Update the selected expense from the form fields
    pub fn update_expense(&mut self) {
        if self.refuse_write() {
            return;
        }
        let result = self
            .session
            .update(self.amount_input.value(), self.category_input.value());

        match result {
            Ok(expense) => {
                self.clear_form();
                self.set_status(format!("Updated '{}'", expense.category));
            }
            Err(e) => self.show_error(&e),
        }
        self.clamp_row();
    }

    /// Delete the selected expense
    pub fn delete_expense(&mut self) {
        if self.refuse_write() {
            return;
        }
        match self.session.delete() {
            Ok(expense) => {
                self.clear_form();
                self.set_status(format!("Deleted '{}'", expense.category));
            }
            Err(e) => self.show_error(&e),
        }
        self.clamp_row();
    }

    /// Re-run the filter with the search field's text
    pub fn search_changed(&mut self) {
        self.session.set_search(self.search_input.value());
        self.clamp_row();
    }

    /// Switch theme and remember it in the settings file
    pub fn toggle_theme(&mut self) {
        let before = self.settings.clone();
        let theme = self.session.toggle_theme();
        self.settings.theme = theme;

        let result = self.settings.save(self.paths).and_then(|()| {
            self.session.store().storage().log_update(
                EntityType::Settings,
                "theme".to_string(),
                None,
                &before,
                &*self.settings,
                Some(format!("theme: {} -> {}", before.theme, theme)),
            )
        });
        if let Err(e) = result {
            self.show_error(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::models::Money;
    use crate::services::ExpenseStore;
    use crate::storage::Storage;
    use tempfile::TempDir;

    struct Fixture {
        session: Session,
        settings: Settings,
        paths: ExpensePaths,
        _temp: TempDir,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp.path().to_path_buf());
        let storage = Storage::without_audit(paths.default_expense_file());
        Fixture {
            session: Session::new(ExpenseStore::new(storage), Theme::Light),
            settings: Settings::default(),
            paths,
            _temp: temp,
        }
    }

    fn type_into(input: &mut TextInput, text: &str) {
        input.clear();
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_add_clears_form() {
        let mut f = fixture();
        let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);

        type_into(&mut app.amount_input, "12.5");
        type_into(&mut app.category_input, "Rent");
        app.add_expense();

        assert!(app.alert.is_none());
        assert_eq!(app.amount_input.value(), "");
        assert_eq!(app.session.total(), Money::from_cents(1250));
    }

    #[test]
    fn test_add_invalid_shows_alert() {
        let mut f = fixture();
        let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);

        type_into(&mut app.amount_input, "3");
        app.add_expense();

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Input Error");
        assert_eq!(app.amount_input.value(), "3");
        assert!(app.session.store().is_empty());
    }

    #[test]
    fn test_select_then_update() {
        let mut f = fixture();
        let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);
        app.session.add("10", "Food").unwrap();

        app.select_highlighted();
        assert_eq!(app.amount_input.value(), "10.00");
        assert_eq!(app.category_input.value(), "Food");

        type_into(&mut app.amount_input, "15");
        app.update_expense();

        assert!(app.alert.is_none());
        assert_eq!(app.session.total(), Money::from_units(15));
        assert!(app.session.selected().is_none());
    }

    #[test]
    fn test_delete_without_selection_alerts() {
        let mut f = fixture();
        let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);
        app.session.add("10", "Food").unwrap();

        app.delete_expense();

        assert_eq!(app.alert.as_ref().map(|a| a.title.as_str()), Some("No Selection"));
        assert_eq!(app.session.store().len(), 1);
    }

    #[test]
    fn test_search_clamps_highlight() {
        let mut f = fixture();
        let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);
        app.session.add("10", "Food").unwrap();
        app.session.add("5", "Travel").unwrap();
        app.move_down();
        assert_eq!(app.table_row, 1);

        type_into(&mut app.search_input, "food");
        app.search_changed();

        assert_eq!(app.table_row, 0);
        assert_eq!(app.session.visible_len(), 1);
    }

    #[test]
    fn test_toggle_theme_saves_settings() {
        let mut f = fixture();
        {
            let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);
            app.toggle_theme();
            assert_eq!(app.palette(), Palette::DARK);
        }

        assert_eq!(Settings::load_or_create(&f.paths).unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_read_only_blocks_writes() {
        let mut f = fixture();
        std::fs::write(f.paths.default_expense_file(), "10,Food\nbroken\n5,Travel\n").unwrap();
        assert!(f.session.load().is_err());

        let mut app = App::new(&mut f.session, &mut f.settings, &f.paths);
        app.read_only = true;

        type_into(&mut app.amount_input, "3");
        type_into(&mut app.category_input, "Tea");
        app.add_expense();
        assert_eq!(app.alert.as_ref().map(|a| a.title.as_str()), Some("Read Only"));
        app.dismiss_alert();

        app.select_highlighted();
        app.delete_expense();
        assert!(app.alert.is_some());
        assert_eq!(app.session.store().len(), 1);

        let contents = std::fs::read_to_string(f.paths.default_expense_file()).unwrap();
        assert_eq!(contents, "10,Food\nbroken\n5,Travel\n");
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Table;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Table);
        assert_eq!(Focus::Table.prev(), Focus::Search);
    }
}
