//! Expense CLI commands
//!
//! Implements the add, edit, delete, list and total commands. Rows are the
//! 1-based positions shown by `list` for the same `--search` text.

use clap::Subcommand;

use crate::display::{format_expense_details, format_expense_table, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::services::Session;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label
        category: String,
    },

    /// Edit an expense
    Edit {
        /// Row number from 'list'
        row: usize,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// New category label
        category: String,
        /// Search text the row number refers to
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Row number from 'list'
        row: usize,
        /// Search text the row number refers to
        #[arg(short, long, default_value = "")]
        search: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List expenses with their total
    #[command(alias = "ls")]
    List {
        /// Only show categories containing this text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show the total of the (filtered) expenses
    Total {
        /// Only count categories containing this text
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

impl ExpenseCommands {
    /// Whether this command rewrites the expense file
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Edit { .. } | Self::Delete { .. })
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut Session,
    currency_symbol: &str,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add { amount, category } => {
            let id = session.add(&amount, &category)?;
            if let Some(expense) = session.store().get(id) {
                println!("Added expense: {}", format_expense_details(expense, currency_symbol));
            }
            println!("{}", format_total(session.total(), currency_symbol));
        }

        ExpenseCommands::Edit {
            row,
            amount,
            category,
            search,
        } => {
            session.set_search(&search);
            select_row(session, row)?;
            let updated = session.update(&amount, &category)?;
            println!(
                "Updated expense: {}",
                format_expense_details(&updated, currency_symbol)
            );
        }

        ExpenseCommands::Delete { row, search, force } => {
            session.set_search(&search);
            let details = format_expense_details(select_row(session, row)?, currency_symbol);

            if !force {
                println!("About to delete expense: {}", details);
                println!("Use --force to confirm deletion");
                session.clear_selection();
                return Ok(());
            }

            session.delete()?;
            println!("Deleted expense: {}", details);
        }

        ExpenseCommands::List { search } => {
            session.set_search(&search);
            println!("{}", format_expense_table(session.visible(), currency_symbol));
            println!();
            println!("{}", format_total(session.total(), currency_symbol));
        }

        ExpenseCommands::Total { search } => {
            session.set_search(&search);
            println!("{}", format_total(session.total(), currency_symbol));
        }
    }

    Ok(())
}

/// Select by the 1-based row number a user sees in `list`
fn select_row(session: &mut Session, row: usize) -> ExpenseResult<&Expense> {
    if row == 0 {
        return Err(ExpenseError::NoSelection("Rows are numbered from 1".into()));
    }
    session.select_row(row - 1)
}
