use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{
    handle_add, handle_budget_command, handle_category_command, handle_delete, handle_edit,
    handle_export, handle_history, handle_list, handle_reset, handle_summary, AddArgs,
    BudgetCommands, CategoryCommands, DeleteArgs, EditArgs, ExportArgs, ListArgs,
};
use expense_tracker::clock::SystemClock;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::ledger::LedgerModel;
use expense_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track income and expenses against a monthly budget",
    long_about = "A personal expense tracker for the terminal. Record income and \
                  expenses, organize them by category, and keep an eye on how much \
                  of this month's budget is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Record a new transaction
    Add(AddArgs),

    /// Change an existing transaction
    Edit(EditArgs),

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show income, expense and balance totals
    Summary,

    /// Export all data to a file
    Export(ExportArgs),

    /// Clear all data
    Reset {
        /// Skip both confirmations
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = FileStore::open(paths.data_dir())?;
    let mut ledger = LedgerModel::load(store, SystemClock);
    if settings.audit_enabled {
        ledger = ledger.with_audit(AuditLogger::new(paths.audit_log()));
    }

    match cli.command {
        Some(Commands::Tui) => expense_tracker::tui::run_tui(&mut ledger, &settings)?,
        Some(Commands::Add(args)) => handle_add(&mut ledger, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit(&mut ledger, &settings, args)?,
        Some(Commands::Delete(args)) => handle_delete(&mut ledger, args)?,
        Some(Commands::List(args)) => handle_list(&ledger, &settings, args)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut ledger, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary(&ledger, &settings)?,
        Some(Commands::Export(args)) => handle_export(&ledger, &paths, &settings, args)?,
        Some(Commands::Reset { yes }) => handle_reset(&mut ledger, yes)?,
        Some(Commands::History { limit }) => {
            handle_history(&AuditLogger::new(paths.audit_log()), limit)?
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Export format:   {:?}", settings.default_export_format);
        }
        None => {
            println!("Expense Tracker - income, expenses and a monthly budget");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense tui' to launch the interactive dashboard.");
        }
    }

    if let Some(warning) = ledger.take_audit_warning() {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
