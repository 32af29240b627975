use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_config_command, handle_expense_command, ConfigArgs, ExpenseCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::display::format_category_list;
use expense_tracker::storage;

/// Environment variable controlling log output, e.g. `EXPENSES_LOG=debug`
const LOG_ENV: &str = "EXPENSES_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track your spending and summarize it by category and month"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut store = storage::open(&paths)?;
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &mut settings, args)?;
        }
        None => {
            println!("Expense Tracker - record and summarize your spending");
            println!();
            print!("{}", format_category_list());
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
