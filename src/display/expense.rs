//! Expense display formatting
//!
//! Formats the filter view as a numbered table, the running total, and the
//! audit history for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format expenses as a table with 1-based row numbers
pub fn format_expense_table<'a, I>(expenses: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .enumerate()
        .map(|(i, expense)| ExpenseRow {
            row: i + 1,
            amount: expense.amount.format_with_symbol(currency_symbol),
            category: expense.category.clone(),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    table.to_string()
}

/// Format the total line shown under the table
pub fn format_total(total: Money, currency_symbol: &str) -> String {
    format!("Total Expense: {}", total.format_with_symbol(currency_symbol))
}

/// Format one expense for confirmation messages
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{} {}",
        expense.amount.format_with_symbol(currency_symbol),
        expense.category
    )
}

/// Format audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::summary)
        .collect::<Vec<_>>()
        .join("\n")
}
