//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Herfindahl - portfolio concentration (HHI) on TVPI, value, realized,
/// unrealized or invested shares
#[derive(Parser, Debug)]
#[command(name = "hhi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CSV
    pub input_csv: PathBuf,

    /// Identifier column for reporting [default: Deal]. Falls back to the first
    /// column in invested mode, otherwise to a 1-based index
    #[arg(long)]
    pub id_col: Option<String>,

    /// Share definition: tvpi, value, realized, unrealized, invested [default: value]
    #[arg(long)]
    pub mode: Option<String>,

    /// Write the full ranked detail table to this CSV path
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Output format [default: table]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of ranked rows shown on the console [default: 10]
    #[arg(long)]
    pub top: Option<usize>,

    /// Decimal places for shares and indices [default: 6]
    #[arg(long)]
    pub precision: Option<usize>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "HHI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress section headers and status lines; the report itself is still printed
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format (detail table only)
    Csv,
    /// Minimal output (just the index values)
    Minimal,
}
