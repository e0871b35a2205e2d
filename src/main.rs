use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use smart_expense::cli::{
    handle_add_command, handle_advise_command, handle_analytics_command, handle_brain_command,
    handle_dashboard_command, handle_price_command, handle_receipt_command, handle_sheet_command,
    AddArgs, AdviseArgs, AnalyticsArgs, BrainArgs, DashboardArgs, PriceArgs, ReceiptArgs,
    SheetArgs,
};
use smart_expense::config::paths::resolve_data_file;
use smart_expense::config::{ExpensePaths, Settings};
use smart_expense::logging;
use smart_expense::storage::Dataset;

#[derive(Parser)]
#[command(
    name = "smart-expense",
    version,
    about = "Terminal expense dashboard with spending analytics",
    long_about = "Smart Expense loads a cleaned transaction CSV and shows where \
                  the money went: budget headline figures, smoothed spending \
                  trends, amount distributions and category shares, in an \
                  interactive dashboard or as plain-text reports."
)]
struct Cli {
    /// Transaction CSV to load (defaults to Cleaned_AI_Ready.csv)
    #[arg(long, global = true, env = "SMART_EXPENSE_DATA")]
    data: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print headline metrics and current spending trends
    Dashboard(DashboardArgs),

    /// Print trend, distribution and share reports for a date range
    Analytics(AnalyticsArgs),

    /// Validate a manual expense entry
    Add(AddArgs),

    /// Look up cheaper prices for a product
    Price(PriceArgs),

    /// Scan a receipt image
    Receipt(ReceiptArgs),

    /// Ask the spending advisor for a tip
    Advise(AdviseArgs),

    /// Send a prompt to the Gemini model
    Brain(BrainArgs),

    /// Write a cell in a Google Sheet
    Sheet(SheetArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = logging::filter_directive(&settings.log_level, cli.verbose);
    if matches!(command, Commands::Tui) {
        logging::init_file(&paths, &level)?;
    } else {
        logging::init_stderr(&level);
    }

    let data_file = resolve_data_file(cli.data.as_deref(), settings.data_file.as_deref());
    // Only the data views read the CSV
    let load_dataset = || Dataset::load(&data_file);

    match command {
        Commands::Tui => smart_expense::tui::run_tui(&load_dataset()?, &settings)?,
        Commands::Dashboard(args) => handle_dashboard_command(&load_dataset()?, &settings, args)?,
        Commands::Analytics(args) => handle_analytics_command(&load_dataset()?, &settings, args)?,
        Commands::Add(args) => handle_add_command(args)?,
        Commands::Price(args) => handle_price_command(&settings, args)?,
        Commands::Receipt(args) => handle_receipt_command(&settings, args)?,
        Commands::Advise(args) => handle_advise_command(&settings, args)?,
        Commands::Brain(args) => handle_brain_command(&settings, args),
        Commands::Sheet(args) => handle_sheet_command(&settings, args)?,
        Commands::Config => {
            println!("Smart Expense Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!("Data file:        {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency:            {}", settings.currency_symbol);
            println!("  Smoothing window:    {}", settings.smoothing_window);
            println!(
                "  Monthly budget:      {}",
                settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Headline period:     {}", settings.headline_period);
            println!("  Simulated latency:   {} ms", settings.simulated_latency_ms);
            println!("  Gemini model:        {}", settings.gemini_model);
            println!("  Spreadsheet:         {}", settings.spreadsheet_name);
            println!("  Credentials file:    {}", settings.credentials_file.display());
        }
    }

    Ok(())
}
