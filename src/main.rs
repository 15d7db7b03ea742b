//! Resistor color-code calculator.
//!
//! Runs the interactive calculator when started without a subcommand, or a
//! headless command (`calc`, `colors`, `format`, `config`) for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rescode::cli::{CalcArgs, CliResult, ColorsArgs, ConfigArgs, FormatArgs};
use rescode::config::Config;

/// Resistor color-code calculator
#[derive(Parser, Debug)]
#[command(name = "rescode", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a resistor from its color bands
    Calc(CalcArgs),
    /// List band colors and their attributes
    Colors(ColorsArgs),
    /// Format a raw resistance in ohms
    Format(FormatArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Calc(args) => args.execute(),
            Self::Colors(args) => args.execute(),
            Self::Format(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(command) = &cli.command {
        if let Err(err) = command.execute() {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code.code());
        }
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    });
    run_interactive(&config)
}

#[cfg(feature = "ratatui")]
fn run_interactive(config: &Config) -> Result<()> {
    rescode::tui::launch(config)
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive(_config: &Config) -> Result<()> {
    anyhow::bail!(
        "{} was built without the interactive UI; run `{} calc --help`",
        rescode::constants::APP_NAME,
        rescode::constants::APP_BINARY_NAME
    )
}
