//! CLI configuration.
//!
//! Defaults can be kept in a TOML file so recurring runs do not repeat flags:
//!
//! ```toml
//! id_col = "Società"
//! mode = "invested"
//! format = "table"
//! top = 15
//! precision = 4
//! use_colors = false
//! ```
//!
//! Lookup order: `--config`, `./herfindahl.toml`, then
//! `<config dir>/herfindahl/config.toml`. Command-line flags win over the file.

use std::path::{Path, PathBuf};

use herfindahl_core::types::columns;
use herfindahl_core::ShareMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "herfindahl.toml";

/// Largest supported number of decimals.
pub const MAX_PRECISION: usize = 12;

/// File-backed defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Identifier column
    #[serde(default = "default_id_col")]
    pub id_col: String,

    /// Share mode name
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Console output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Ranked rows shown on the console
    #[serde(default = "default_top")]
    pub top: usize,

    /// Decimal places for shares and indices
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Enable colored status lines
    #[serde(default = "default_true")]
    pub use_colors: bool,
}

fn default_id_col() -> String {
    columns::DEAL.to_string()
}

fn default_mode() -> String {
    ShareMode::default().as_str().to_string()
}

fn default_top() -> usize {
    10
}

fn default_precision() -> usize {
    6
}

fn default_true() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            id_col: default_id_col(),
            mode: default_mode(),
            format: OutputFormat::default(),
            top: default_top(),
            precision: default_precision(),
            use_colors: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Resolve and load the configuration, falling back to defaults.
    ///
    /// An explicit path must exist; discovered paths are optional.
    pub fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit configuration");
            return Self::from_file(path);
        }

        match discovered_path() {
            Some(path) => {
                debug!(path = %path.display(), "loading discovered configuration");
                Self::from_file(&path)
            }
            None => {
                debug!("using default configuration");
                Ok(Self::default())
            }
        }
    }
}

fn discovered_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("herfindahl").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Effective settings for one run: config file merged with flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Input CSV
    pub input_csv: PathBuf,
    /// Identifier column
    pub id_col: String,
    /// Share mode
    pub mode: ShareMode,
    /// Optional detail CSV destination
    pub output_csv: Option<PathBuf>,
    /// Console output format
    pub format: OutputFormat,
    /// Ranked rows shown on the console
    pub top: usize,
    /// Decimal places
    pub precision: usize,
    /// Colored status lines
    pub use_colors: bool,
    /// Suppress informational lines
    pub quiet: bool,
}

impl RunSettings {
    /// Merge command-line flags over the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown mode and
    /// [`CliError::InvalidSetting`] for out-of-range numbers.
    pub fn resolve(cli: &Cli, config: CliConfig) -> CliResult<Self> {
        let mode: ShareMode = cli.mode.as_deref().unwrap_or(&config.mode).parse()?;

        let top = cli.top.unwrap_or(config.top);
        if top == 0 {
            return Err(CliError::InvalidSetting {
                name: "top",
                reason: "must be at least 1".to_string(),
            });
        }

        let precision = cli.precision.unwrap_or(config.precision);
        if precision > MAX_PRECISION {
            return Err(CliError::InvalidSetting {
                name: "precision",
                reason: format!("{precision} exceeds the maximum of {MAX_PRECISION}"),
            });
        }

        let format = cli.format.unwrap_or(config.format);
        Ok(Self {
            input_csv: cli.input_csv.clone(),
            id_col: cli.id_col.clone().unwrap_or(config.id_col),
            mode,
            output_csv: cli.output_csv.clone(),
            format,
            top,
            precision,
            use_colors: config.use_colors,
            // Machine-readable formats keep stdout free of status lines
            quiet: cli.quiet || matches!(format, OutputFormat::Json | OutputFormat::Csv),
        })
    }
}
