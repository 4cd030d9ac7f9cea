use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_tracker::cli::{Prompter, Session};
use expense_tracker::config::ExpensePaths;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Interactive personal expense tracker",
    long_about = "Records dated, categorized expenses in a CSV file and compares \
                  total spending against a monthly budget. Runs as a menu-driven \
                  session on the terminal."
)]
struct Cli {
    /// Expenses CSV file (defaults to ./expenses.csv)
    #[arg(short, long, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr).compact())
        .init();

    let paths = ExpensePaths::new(cli.file)?;
    tracing::debug!(path = %paths.data_file().display(), "using expenses file");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let mut session = Session::open(paths, &mut prompter)?;
    session.run(&mut prompter)?;

    Ok(())
}
