//! Expense file persistence
//!
//! The expense file is plain text with one record per line:
//!
//! ```text
//! 12.50,Rent
//! 3.00,Coffee
//! ```
//!
//! The amount is a decimal string and the category is written raw, without
//! escaping. A line is split on its first comma, so a category that itself
//! contains a comma comes back intact, but a category can never start before
//! the first comma of the line.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

use super::file_io::{read_text, write_text_atomic};

/// Format one expense as a file line (without the trailing newline)
pub fn format_line(expense: &Expense) -> String {
    format!("{},{}", expense.amount, expense.category)
}

/// Parse one file line into an expense
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> ExpenseResult<Expense> {
    let format_error = |message: String| ExpenseError::FileFormat {
        line: line_number,
        message,
    };

    let (amount_text, category) = line
        .split_once(',')
        .ok_or_else(|| format_error("expected 'amount,category'".into()))?;

    let amount = Money::parse(amount_text).map_err(|e| format_error(e.to_string()))?;

    Expense::validate_fields(amount, category).map_err(|e| format_error(e.to_string()))?;

    Ok(Expense::new(amount, category))
}

/// Render a full expense list in file format
pub fn render(expenses: &[Expense]) -> String {
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_line(expense));
        output.push('\n');
    }
    output
}

/// The backing file of an expense store
#[derive(Debug, Clone)]
pub struct ExpenseFile {
    path: PathBuf,
}

impl ExpenseFile {
    /// Create a handle to the expense file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every record in the file to `out`
    ///
    /// A missing file loads nothing. Blank lines are skipped. Loading stops at
    /// the first malformed line with a `FileFormat` error; records parsed
    /// before it stay in `out`. A file that cannot be read or is not UTF-8
    /// is a `FileFormat` error for line 0.
    pub fn load_into(&self, out: &mut Vec<Expense>) -> ExpenseResult<()> {
        let contents = read_text(&self.path).map_err(|e| ExpenseError::FileFormat {
            line: 0,
            message: e.message(),
        })?;
        let Some(contents) = contents else {
            return Ok(());
        };

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            out.push(parse_line(line, index + 1)?);
        }

        Ok(())
    }

    /// Read every record in the file
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = Vec::new();
        self.load_into(&mut expenses)?;
        Ok(expenses)
    }

    /// Overwrite the file with the given records
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_text_atomic(&self.path, &render(expenses))
    }
}
