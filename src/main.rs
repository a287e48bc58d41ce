use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_export, handle_history, handle_list, handle_summary, ExportFormat,
};
use expense_tracker::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::storage::{initialize_storage, needs_initialization};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker with a category breakdown chart",
    long_about = "Record expenses with a date, a category and an amount, list them, \
                  and view a pie chart of where the money went. Data is kept in a \
                  local SQLite file."
)]
struct Cli {
    /// Directory holding expenses.db, config.json and audit.log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Record a new expense
    Add {
        /// Date, e.g. 2024-03-01
        date: String,
        /// Category label
        category: String,
        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List recorded expenses
    List {
        /// Show only the most recent N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show totals per category
    Summary,

    /// Export all expenses
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory, settings file and database
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let first_run = needs_initialization(&paths);
    let storage = initialize_storage(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Add {
            date,
            category,
            amount,
        }) => {
            handle_add(&storage, &settings, &date, &category, &amount)?;
        }
        Some(Commands::List { limit }) => {
            handle_list(&storage, &settings, limit)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&storage, &settings)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export(&storage, format, output, pretty)?;
        }
        Some(Commands::History { limit }) => {
            handle_history(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if first_run {
                println!("Created database: {}", paths.database_file().display());
            } else {
                println!("Database already exists; existing expenses were kept.");
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'expenses add <DATE> <CATEGORY> <AMOUNT>' to record an expense,");
            println!("or 'expenses' to open the interactive interface.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings:       {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Prefill today's date: {}", settings.prefill_today);
            println!("  Amount decimals:      {}", settings.amount_decimals);
            println!("  Tick rate (ms):       {}", settings.tick_rate_ms);
            println!("  Stored expenses:      {}", storage.expenses.count()?);
        }
    }

    Ok(())
}
