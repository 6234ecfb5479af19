use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use expense_ledger::cli::{handle_config_command, Session};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::{logging, Ledger};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Record dated expenses by category, then list, filter and \
                  summarize them from an interactive menu. Expenses are kept \
                  in memory only and are gone when the program exits."
)]
struct Cli {
    /// Directory holding config.json
    #[arg(long, global = true, env = "EXPENSE_LEDGER_DIR")]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Run,

    /// Show current configuration and paths
    Config {
        /// Write a default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::resolve(cli.config_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    logging::init(&settings.log_level, cli.verbose);

    match cli.command {
        None | Some(Commands::Run) => {
            let mut ledger = Ledger::new();
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&mut ledger, &settings, stdin.lock(), stdout.lock()).run()?;
        }
        Some(Commands::Config { init }) => {
            handle_config_command(&paths, &settings, init, &mut io::stdout())?;
        }
    }

    Ok(())
}
