//! Output formatting utilities.

use colored::Colorize;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use herfindahl_core::report::{SHARE_HEADER, SHARE_SQUARED_HEADER};
use herfindahl_core::{ConcentrationReport, ConcentrationResult, DetailRow, DetailTable, ShareMode};

/// Turns colored status lines off; when enabled, terminal detection decides.
pub fn set_colors(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Formats a normalized HHI, spelling out the undefined case.
pub fn format_normalized(result: &ConcentrationResult, precision: usize) -> String {
    match result.hhi_normalized() {
        Some(h) => format!("{h:.precision$}"),
        None => format!("undefined (N={})", result.holdings()),
    }
}

/// Summary metrics of a report.
pub fn summary_rows(report: &ConcentrationReport, precision: usize) -> Vec<KeyValue> {
    let result = &report.result;
    vec![
        KeyValue::new("Share definition", report.mode.metric_name()),
        KeyValue::new("Holdings", result.holdings().to_string()),
        KeyValue::new("HHI", format!("{:.precision$}", result.hhi())),
        KeyValue::new("HHI* (0-1)", format_normalized(result, precision)),
        KeyValue::new(
            "Effective holdings (1/HHI)",
            result
                .effective_holdings()
                .map_or_else(|| "n/a".to_string(), |e| format!("{e:.2}")),
        ),
        KeyValue::new("Risk level", result.risk_level().label()),
    ]
}

/// Renders the summary as a two-column table.
pub fn render_summary(report: &ConcentrationReport, precision: usize) -> String {
    Table::new(summary_rows(report, precision))
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// Renders the first `top` ranked rows as an aligned table.
pub fn render_detail(detail: &DetailTable, top: usize, precision: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(detail.headers());
    for row in detail.top(top) {
        let mut record = vec![
            row.id.clone(),
            format!("{:.precision$}", row.share),
            format!("{:.precision$}", row.share_squared),
        ];
        record.extend(row.values.iter().map(|v| format_value(*v)));
        builder.push_record(record);
    }

    builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// Formats a raw contributing value; blanks stay blank.
fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// JSON document with summary and all detail rows.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    mode: ShareMode,
    holdings: usize,
    hhi: f64,
    hhi_normalized: Option<f64>,
    effective_holdings: Option<f64>,
    risk_level: &'static str,
    detail: Vec<JsonDetailRow<'a>>,
}

/// A detail row serialized as an object whose keys follow the table columns.
#[derive(Debug)]
pub struct JsonDetailRow<'a> {
    detail: &'a DetailTable,
    row: &'a DetailRow,
}

impl Serialize for JsonDetailRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.row.values.len()))?;
        map.serialize_entry(&self.detail.id_header, &self.row.id)?;
        map.serialize_entry(SHARE_HEADER, &self.row.share)?;
        map.serialize_entry(SHARE_SQUARED_HEADER, &self.row.share_squared)?;
        for (header, value) in self.detail.value_columns.iter().zip(&self.row.values) {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// Builds the JSON document for a report.
pub fn report_json(report: &ConcentrationReport) -> JsonReport<'_> {
    let result = &report.result;
    JsonReport {
        mode: report.mode,
        holdings: result.holdings(),
        hhi: result.hhi(),
        hhi_normalized: result.hhi_normalized(),
        effective_holdings: result.effective_holdings(),
        risk_level: result.risk_level().label(),
        detail: report
            .detail
            .rows
            .iter()
            .map(|row| JsonDetailRow {
                detail: &report.detail,
                row,
            })
            .collect(),
    }
}

/// One-line output: `hhi,hhi_normalized,risk_level`.
pub fn render_minimal(result: &ConcentrationResult, precision: usize) -> String {
    let normalized = result
        .hhi_normalized()
        .map_or_else(|| "undefined".to_string(), |h| format!("{h:.precision$}"));
    format!(
        "{:.precision$},{},{}",
        result.hhi(),
        normalized,
        result.risk_level().label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use herfindahl_core::prelude::*;

    fn report(rows: &[&[&str]]) -> ConcentrationReport {
        let table = PortfolioTable::from_str_rows(&["Deal", "PaidIn", "NAV"], rows);
        let shares = build_shares(&table, ShareMode::Value).unwrap();
        let result = compute_hhi(&shares);
        ConcentrationReport::build(&table, &shares, result, ShareMode::Value, "Deal")
    }

    #[test]
    fn test_minimal() {
        let r = report(&[&["A", "1", "3"], &["B", "1", "1"]]);
        assert_eq!(render_minimal(&r.result, 4), "0.6250,0.2500,Medium-Low");
    }

    #[test]
    fn test_minimal_undefined() {
        let r = report(&[&["A", "1", "3"]]);
        assert_eq!(render_minimal(&r.result, 2), "1.00,undefined,undefined");
        assert_eq!(format_normalized(&r.result, 2), "undefined (N=1)");
    }

    #[test]
    fn test_detail_table_contains_rows() {
        let r = report(&[&["Small", "1", "1"], &["Large", "1", "3"]]);
        let rendered = render_detail(&r.detail, 10, 3);
        assert!(rendered.contains("Share^2"));
        assert!(rendered.contains("ValueCreated"));
        let large = rendered.find("Large").unwrap();
        let small = rendered.find("Small").unwrap();
        assert!(large < small);
        assert!(rendered.contains("0.750"));
    }

    #[test]
    fn test_detail_table_respects_top() {
        let r = report(&[&["A", "1", "1"], &["B", "1", "2"], &["C", "1", "3"]]);
        let rendered = render_detail(&r.detail, 1, 3);
        assert!(rendered.contains("│ C"));
        assert!(!rendered.contains("│ A"));
    }

    #[test]
    fn test_json_shape() {
        let r = report(&[&["A", "1", "3"]]);
        let value = serde_json::to_value(report_json(&r)).unwrap();
        assert_eq!(value["mode"], "value");
        assert!(value["hhi_normalized"].is_null());
        assert_eq!(value["risk_level"], "undefined");
        assert_eq!(value["detail"][0]["Deal"], "A");
        assert_eq!(value["detail"][0]["ValueCreated"], 3.0);
    }

    #[test]
    fn test_json_detail_keys_follow_columns() {
        let r = report(&[&["A", "1", "3"], &["B", "1", "1"]]);
        let text = serde_json::to_string(&report_json(&r)).unwrap();
        let positions: Vec<usize> = ["Deal", "Share", "Share^2", "PaidIn", "NAV", "ValueCreated"]
            .iter()
            .map(|key| text.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_identifier_not_overwritten() {
        let table =
            PortfolioTable::from_str_rows(&["PaidIn", "NAV"], &[&["1", "3"], &["1", "1"]]);
        let shares = build_shares(&table, ShareMode::Value).unwrap();
        let result = compute_hhi(&shares);
        let r = ConcentrationReport::build(&table, &shares, result, ShareMode::Value, "NAV");
        let value = serde_json::to_value(report_json(&r)).unwrap();
        assert_eq!(value["detail"][0]["NAV"], "3");
        assert_eq!(value["detail"][0]["ValueCreated"], 3.0);
    }
}
