//! CSV portfolio reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use herfindahl_core::PortfolioTable;
use tracing::info;

use crate::error::{FileError, FileResult};

/// Loads a portfolio table from a CSV file with a header row.
///
/// Headers and cells are trimmed. Every record must have as many fields as the
/// header row.
///
/// # Errors
///
/// Returns [`FileError::Read`] if the file cannot be opened and
/// [`FileError::Parse`] if it is not well-formed CSV.
pub fn load_portfolio_table(path: impl AsRef<Path>) -> FileResult<PortfolioTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::read(path, e))?;
    let table = read_portfolio_table(file, path)?;
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.column_count(),
        "loaded portfolio table"
    );
    Ok(table)
}

/// Reads a portfolio table from any reader; `source` names it in errors.
///
/// # Errors
///
/// Returns [`FileError::Read`] on I/O failure and [`FileError::Parse`] on
/// malformed content.
pub fn read_portfolio_table<R: Read>(input: R, source: &Path) -> FileResult<PortfolioTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .iter()
        .map(String::from)
        .collect();
    if let Some(first) = headers.first_mut() {
        *first = first.trim_start_matches('\u{feff}').trim().to_string();
    }
    if headers.iter().all(String::is_empty) {
        return Err(FileError::parse(source, "missing header row"));
    }

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(String::from).collect::<Vec<_>>())
                .map_err(|e| csv_error(source, e))
        })
        .collect::<FileResult<Vec<_>>>()?;

    Ok(PortfolioTable::new(headers, rows))
}

fn csv_error(path: &Path, err: csv::Error) -> FileError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => FileError::read(path, io),
            other => FileError::parse(path, format!("{other:?}")),
        }
    } else {
        FileError::parse(path, err)
    }
}
