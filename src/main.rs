use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_manager::cli::{handle_expense_command, handle_theme_command, ExpenseCommands, ThemeMode};
use expense_manager::config::{ExpensePaths, Settings};
use expense_manager::display::format_history;
use expense_manager::error::ExpenseError;
use expense_manager::services::{ExpenseStore, Session};
use expense_manager::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses in a plain text file",
    long_about = "Expense Manager keeps a list of expenses (amount and category) in a \
                  plain text file. Add, edit, delete and search them from the command \
                  line, or run without a command for the interactive interface."
)]
struct Cli {
    /// Expense file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_MANAGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show or change the color theme
    Theme {
        /// light, dark or toggle; omit to print the current theme
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ExpenseError>() {
                Some(err) => eprintln!("{}: {}", err.title(), err.message()),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let expense_file = settings.expense_file(&paths, cli.file);

    let storage = Storage::new(expense_file, paths.audit_log());
    let mut session = Session::new(ExpenseStore::new(storage), settings.theme);
    let load_error = session.load().err();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            expense_manager::tui::run_tui(&mut session, &mut settings, &paths, load_error)?;
        }
        Commands::Expense(cmd) => {
            if let Some(err) = load_error {
                // Saving now would drop every line after the bad one
                if cmd.is_mutation() {
                    return Err(err.into());
                }
                eprintln!("Warning: {}", err.message());
            }
            handle_expense_command(&mut session, &settings.currency_symbol, cmd)?;
        }
        Commands::Theme { mode } => {
            handle_theme_command(&mut session, &mut settings, &paths, mode)?;
        }
        Commands::History { limit } => {
            let entries = match session.store().storage().audit() {
                Some(logger) => logger.read_recent(limit)?,
                None => Vec::new(),
            };
            println!("{}", format_history(&entries));
        }
        Commands::Config => {
            println!("Expense Manager Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Expense file:     {}", session.store().storage().expenses.path().display());
            println!();
            println!("Settings:");
            println!("  Theme:           {}", settings.theme);
            println!("  Currency symbol: {}", settings.currency_symbol);
            if let Some(err) = load_error {
                println!();
                println!("Warning: {}", err.message());
            }
        }
    }

    Ok(())
}
