use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use spendlens::cli::{
    handle_config_command, handle_expenses_command, handle_report_command,
    handle_vendors_command, ConfigCommands, ExpenseArgs, ReportArgs,
};
use spendlens::config::{paths::SpendPaths, settings::Settings};
use spendlens::logging::init_tracing;
use spendlens::storage::Snapshot;

#[derive(Parser)]
#[command(
    name = "spendlens",
    author = "Kaylee Beyene",
    version,
    about = "Spending reports over fetched expense snapshots",
    long_about = "SpendLens reads expense, category and budget snapshots fetched \
                  from your finance backend and summarizes spending by category, \
                  vendor and month."
)]
struct Cli {
    /// Directory holding config.json and the data/ snapshots
    #[arg(long, global = true, env = "SPENDLENS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spending summary by category, vendor and month
    Report(ReportArgs),

    /// List expenses matching the filters
    #[command(alias = "ls")]
    Expenses(ExpenseArgs),

    /// List distinct vendors
    Vendors,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => SpendPaths::with_base_dir(dir),
        None => SpendPaths::new()?,
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_report_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Expenses(args)) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_expenses_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Vendors) => {
            let snapshot = Snapshot::load(&paths)?;
            handle_vendors_command(&snapshot)?;
        }
        Some(Commands::Config { action }) => {
            handle_config_command(&paths, &mut settings, action)?;
        }
        None => {
            println!("SpendLens - spending reports over fetched expense snapshots");
            println!();
            println!("Run 'spendlens --help' for usage information.");
            println!("Run 'spendlens report' to summarize spending.");
        }
    }

    Ok(())
}
