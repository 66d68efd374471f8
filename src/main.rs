use anyhow::Result;
use clap::{Parser, Subcommand};

use toko_ledger::cli::{
    handle_export_command, handle_report_command, handle_summary_command,
    handle_transaction_command, ExportCommands, ReportArgs, TransactionCommands,
};
use toko_ledger::config::{LedgerPaths, Settings};
use toko_ledger::logging::init_tracing;
use toko_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "toko",
    version,
    about = "Income and expense ledger for Toko DGI",
    long_about = "Records the kiosk's income and expenses for its two business lines \
                  (Es Krim & Mainan, Gas) and produces weekly, monthly and \
                  per-category reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show overall totals and transaction counts
    Summary {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show a report in the terminal
    Report(ReportArgs),

    /// Export the report file or a data backup
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all();

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Summary { date }) => {
            handle_summary_command(&storage, &settings, date)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&storage, &settings, args)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("toko-ledger Configuration");
            println!("=========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Backup directory:  {}", paths.backup_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Store name:       {}", settings.store_name);
            println!("  Report policy:    {}", settings.report_policy);
            println!("  Default category: {}", settings.default_category);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("{} - pencatatan keuangan", settings.store_name);
            println!();
            println!("Run 'toko --help' for usage information.");
        }
    }

    Ok(())
}
