//! CLI error types.

use std::path::PathBuf;

use herfindahl_core::HhiError;
use herfindahl_ext_file::FileError;
use thiserror::Error;

/// Exit code for unreadable input or configuration files.
pub const EXIT_DATA_ACCESS: u8 = 1;
/// Exit code for validation failures.
pub const EXIT_VALIDATION: u8 = 2;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file missing, unreadable or malformed.
    #[error("Error reading input CSV: {0}")]
    DataAccess(#[from] FileError),

    /// Share computation preconditions not met.
    #[error("Error computing shares: {0}")]
    Validation(#[from] HhiError),

    /// Configuration file unreadable or malformed.
    #[error("Configuration error in '{}': {reason}", .path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// A setting is out of range.
    #[error("Invalid {name}: {reason}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::InvalidSetting { .. } => EXIT_VALIDATION,
            Self::DataAccess(_) | Self::Config { .. } | Self::Io(_) | Self::Serialization(_) => {
                EXIT_DATA_ACCESS
            }
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_exit_codes() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            CliError::from(FileError::read(Path::new("p.csv"), io)).exit_code(),
            1
        );
        assert_eq!(CliError::from(HhiError::EmptyTable).exit_code(), 2);
        assert_eq!(
            CliError::InvalidSetting {
                name: "top",
                reason: "must be at least 1".into()
            }
            .exit_code(),
            2
        );
    }
}
