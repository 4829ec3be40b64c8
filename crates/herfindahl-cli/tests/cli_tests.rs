//! End-to-end tests for the `hhi` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const THREE_DEALS: &str = "\
Deal,PaidIn,NAV,Distributions
Alpha,10000000,12000000,3000000
Beta,8000000,7500000,1500000
Gamma,5000000,6000000,0
";

/// Runs the binary inside `dir` so no local or user configuration leaks in.
fn hhi(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hhi").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("HHI_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace(csv: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("portfolio.csv"), csv).unwrap();
    dir
}

#[test]
fn test_value_mode_summary() {
    let dir = workspace(THREE_DEALS);
    hhi(dir.path())
        .arg("portfolio.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.380000"))
        .stdout(predicate::str::contains("0.070000"))
        .stdout(predicate::str::contains("Low"))
        .stdout(predicate::str::contains("Alpha"));
}

#[test]
fn test_single_holding_is_undefined() {
    let dir = workspace("Deal,PaidIn,NAV,Distributions\nOnly,100,150,10\n");
    hhi(dir.path())
        .args(["portfolio.csv", "--format", "minimal"])
        .assert()
        .success()
        .stdout("1.000000,undefined,undefined\n");
}

#[test]
fn test_missing_distributions_column() {
    let dir = workspace("Deal,PaidIn,NAV\nA,10,30\nB,10,10\n");
    hhi(dir.path())
        .args(["portfolio.csv", "--format", "minimal", "--precision", "4"])
        .assert()
        .success()
        .stdout("0.6250,0.2500,Medium-Low\n");
}

#[test]
fn test_non_positive_paid_in_fails_validation() {
    let dir = workspace("Deal,PaidIn,NAV,Distributions\nA,0,10,0\nB,10,10,0\n");
    hhi(dir.path())
        .arg("portfolio.csv")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("PaidIn must be positive"));
}

#[test]
fn test_invalid_mode() {
    let dir = workspace(THREE_DEALS);
    hhi(dir.path())
        .args(["portfolio.csv", "--mode", "foo"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "{tvpi,value,realized,unrealized,invested}",
        ));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    hhi(dir.path())
        .arg("absent.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn test_missing_required_column() {
    let dir = workspace("Deal,NAV\nA,10\n");
    hhi(dir.path())
        .args(["portfolio.csv", "--mode", "tvpi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing: PaidIn"));
}

#[test]
fn test_detail_csv_is_written() {
    let dir = workspace(THREE_DEALS);
    hhi(dir.path())
        .args(["portfolio.csv", "--output-csv", "detail.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detail table saved"));

    let written = fs::read_to_string(dir.path().join("detail.csv")).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("Deal,Share,Share^2,PaidIn,NAV,Distributions,ValueCreated")
    );
    assert!(lines.next().unwrap().starts_with("Alpha,0.5,0.25,"));
}

#[test]
fn test_unwritable_detail_csv_only_warns() {
    let dir = workspace(THREE_DEALS);
    hhi(dir.path())
        .args(["portfolio.csv", "--output-csv", "no/such/dir/detail.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.380000"))
        .stderr(predicate::str::contains("Could not save detail CSV"));
}

#[test]
fn test_json_output() {
    let dir = workspace(THREE_DEALS);
    let output = hhi(dir.path())
        .args(["portfolio.csv", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["mode"], "value");
    assert_eq!(value["holdings"], 3);
    assert_eq!(value["risk_level"], "Low");
    assert_eq!(value["detail"][0]["Deal"], "Alpha");
    assert_eq!(value["detail"][2]["Deal"], "Gamma");
}

#[test]
fn test_invested_layout() {
    let dir = workspace("Società,Investito\nA,300\nB,100\n");
    hhi(dir.path())
        .args(["portfolio.csv", "--mode", "invested", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Società,Share,Share^2,Investito\nA,0.75,0.5625,300\n"));
}

#[test]
fn test_config_file_defaults() {
    let dir = workspace("Deal,PaidIn,NAV,Distributions\nA,10,5,20\nB,10,5,0\n");
    fs::write(
        dir.path().join("herfindahl.toml"),
        "mode = \"realized\"\nformat = \"minimal\"\nprecision = 2\n",
    )
    .unwrap();

    hhi(dir.path())
        .arg("portfolio.csv")
        .assert()
        .success()
        .stdout("1.00,1.00,High\n");
}

#[test]
fn test_invalid_config_file() {
    let dir = workspace(THREE_DEALS);
    fs::write(dir.path().join("bad.toml"), "colour = true\n").unwrap();
    hhi(dir.path())
        .args(["portfolio.csv", "--config", "bad.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_quiet_table_omits_section_headers() {
    let dir = workspace(THREE_DEALS);
    hhi(dir.path())
        .args(["portfolio.csv", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.380000"))
        .stdout(predicate::str::contains("Herfindahl-Hirschman Index").not())
        .stdout(predicate::str::contains("contributions to shares").not());
}

#[test]
fn test_huge_values_still_normalize() {
    let dir = workspace("Deal,NAV\nA,1e308\nB,1e308\n");
    hhi(dir.path())
        .args(["portfolio.csv", "--mode", "unrealized", "--format", "minimal"])
        .assert()
        .success()
        .stdout("0.500000,0.000000,Low\n");
}

#[test]
fn test_overflowing_value_created_is_named() {
    let dir = workspace("Deal,PaidIn,NAV,Distributions\nA,10,1e308,1e308\nB,10,1,0\n");
    hhi(dir.path())
        .arg("portfolio.csv")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not finite"))
        .stderr(predicate::str::contains("Negative").not());
}
