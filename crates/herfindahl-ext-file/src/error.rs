//! File access error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors reading or writing portfolio files.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        /// The file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid tabular data.
    #[error("Malformed CSV '{}': {reason}", .path.display())]
    Parse {
        /// The file path.
        path: PathBuf,
        /// What was wrong.
        reason: String,
    },

    /// The file could not be written.
    #[error("Cannot write '{}': {reason}", .path.display())]
    Write {
        /// The file path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
}

impl FileError {
    /// Create a read error.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: &Path, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a write error.
    pub fn write(path: &Path, reason: impl ToString) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Returns true for output failures, which do not invalidate a computed result.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
