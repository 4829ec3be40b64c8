//! Herfindahl CLI - portfolio concentration from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Value-created shares (default) on a full performance layout
//! hhi portfolio.csv
//!
//! # TVPI shares, saving the ranked detail table
//! hhi portfolio.csv --mode tvpi --output-csv detail.csv
//!
//! # Simplified two-column layout of invested amounts
//! hhi invested.csv --mode invested --id-col Società
//! ```
//!
//! # Exit codes
//!
//! - `0` success, including a detail CSV that could not be written
//! - `1` input or configuration file could not be read
//! - `2` share computation failed validation

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::Cli;
use config::{CliConfig, RunSettings};
use error::CliResult;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err.to_string());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = CliConfig::discover(cli.config.as_deref())?;
    let settings = RunSettings::resolve(cli, config)?;
    output::set_colors(settings.use_colors);

    info!(input = %settings.input_csv.display(), mode = %settings.mode, "starting run");
    commands::concentration::execute(&settings)
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
