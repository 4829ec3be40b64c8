//! Detail-table CSV writer.

use std::io::Write;
use std::path::Path;

use herfindahl_core::DetailTable;
use tracing::info;

use crate::error::{FileError, FileResult};

/// Writes the full ranked detail table to a CSV file.
///
/// Numbers use the shortest representation that parses back to the same
/// value, so a reloaded file reproduces shares and ranking exactly.
///
/// # Errors
///
/// Returns [`FileError::Write`] if the file cannot be created or written.
pub fn write_detail_csv(path: impl AsRef<Path>, detail: &DetailTable) -> FileResult<()> {
    let path = path.as_ref();
    let writer = csv::Writer::from_path(path).map_err(|e| FileError::write(path, e))?;
    write_records(writer, detail).map_err(|e| FileError::write(path, e))?;
    info!(path = %path.display(), rows = detail.len(), "wrote detail table");
    Ok(())
}

/// Writes the detail table as CSV to any writer (e.g. stdout).
///
/// # Errors
///
/// Returns [`FileError::Write`] if writing fails.
pub fn write_detail_to<W: Write>(out: W, detail: &DetailTable) -> FileResult<()> {
    write_records(csv::Writer::from_writer(out), detail)
        .map_err(|e| FileError::write(Path::new("<stdout>"), e))
}

fn write_records<W: Write>(mut writer: csv::Writer<W>, detail: &DetailTable) -> csv::Result<()> {
    writer.write_record(detail.headers())?;
    for row in &detail.rows {
        let mut record = vec![
            row.id.clone(),
            format_number(row.share),
            format_number(row.share_squared),
        ];
        record.extend(
            row.values
                .iter()
                .map(|v| v.map(format_number).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load_portfolio_table;
    use herfindahl_core::{build_shares, PortfolioTable, ShareMode};

    fn detail() -> DetailTable {
        let table = PortfolioTable::from_str_rows(
            &["Deal", "PaidIn", "NAV"],
            &[&["A", "10", "1"], &["B", "10", "3"], &["C", "10", ""]],
        );
        let nav_only = PortfolioTable::from_str_rows(
            &["Deal", "PaidIn", "NAV"],
            &[&["A", "10", "1"], &["B", "10", "3"], &["C", "10", "0"]],
        );
        let shares = build_shares(&nav_only, ShareMode::Unrealized).unwrap();
        DetailTable::build(&table, &shares, ShareMode::Unrealized, "Deal")
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buffer = Vec::new();
        write_detail_to(&mut buffer, &detail()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Deal,Share,Share^2,PaidIn,NAV");
        assert_eq!(lines[1], "B,0.75,0.5625,10,3");
        assert_eq!(lines[3], "C,0,0,10,");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_detail_csv("/no/such/dir/out.csv", &detail()).unwrap_err();
        assert!(err.is_write());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detail.csv");
        let detail = detail();
        write_detail_csv(&path, &detail).unwrap();

        let reloaded = load_portfolio_table(&path).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.cell(0, 0), Some("B"));
        assert_eq!(reloaded.required_number(0, 1).unwrap(), 0.75);
    }
}
