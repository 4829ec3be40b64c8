//! Concentration command implementation.
//!
//! Loads a portfolio CSV, builds shares, computes HHI and reports the ranked
//! contributions.

use tracing::{debug, info};

use herfindahl_core::{build_shares, compute_hhi, ConcentrationReport};
use herfindahl_ext_file::{load_portfolio_table, write_detail_csv, write_detail_to};

use crate::cli::OutputFormat;
use crate::config::RunSettings;
use crate::error::{CliError, CliResult};
use crate::output::{
    print_header, print_success, print_warning, render_detail, render_minimal, render_summary,
    report_json,
};

/// Execute the concentration command.
///
/// All validation completes before anything is printed. The optional detail CSV
/// is written last and a failure there only produces a warning.
pub fn execute(settings: &RunSettings) -> CliResult<()> {
    let table = load_portfolio_table(&settings.input_csv)?;
    let shares = build_shares(&table, settings.mode)?;
    let result = compute_hhi(&shares);
    let report = ConcentrationReport::build(&table, &shares, result, settings.mode, &settings.id_col);
    info!(
        mode = %settings.mode,
        holdings = result.holdings(),
        hhi = result.hhi(),
        risk = %result.risk_level(),
        "concentration computed"
    );

    print_report(&report, settings)?;

    if let Some(path) = &settings.output_csv {
        match write_detail_csv(path, &report.detail) {
            Ok(()) => {
                if !settings.quiet {
                    print_success(&format!("Detail table saved to {}", path.display()));
                }
            }
            Err(err) if err.is_write() => {
                debug!(path = %err.path().display(), error = %err, "detail table not saved");
                print_warning(&format!("Could not save detail CSV: {err}"));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn print_report(report: &ConcentrationReport, settings: &RunSettings) -> CliResult<()> {
    match settings.format {
        OutputFormat::Table => {
            if !settings.quiet {
                print_header(&format!(
                    "Herfindahl-Hirschman Index (HHI), share definition: {}",
                    report.mode
                ));
            }
            println!("{}", render_summary(report, settings.precision));

            if !settings.quiet {
                let shown = settings.top.min(report.detail.len());
                print_header(&format!(
                    "Top {shown} of {} contributions to shares",
                    report.detail.len()
                ));
            }
            println!(
                "{}",
                render_detail(&report.detail, settings.top, settings.precision)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report_json(report))?);
        }
        OutputFormat::Csv => {
            write_detail_to(std::io::stdout().lock(), &report.detail)
                .map_err(|e| CliError::Io(std::io::Error::other(e.to_string())))?;
        }
        OutputFormat::Minimal => {
            println!("{}", render_minimal(&report.result, settings.precision));
        }
    }
    Ok(())
}
