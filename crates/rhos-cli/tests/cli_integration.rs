//! Integration tests for the rhos CLI.
//!
//! These tests run the compiled binary end to end, from CSV input through
//! the statistic to CSV output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use rhos_cli::csv_parser::parse_csv_from_reader;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

/// Run the CLI with given arguments and return the output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rhos"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI, assert success and return stdout.
fn run_cli_stdout(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Parse the statistic column (the last one) of CLI output.
fn last_column(stdout: &str) -> Vec<f64> {
    stdout
        .lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap().parse::<f64>().unwrap())
        .collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= 1e-7 * e.abs(),
            "index {i}: actual {a}, expected {e}"
        );
    }
}

#[test]
fn test_mean_to_stdout() {
    let stdout = run_cli_stdout(&["mean", &fixture("impulse.csv"), "0.5"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "time,mean_0.5");
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[3], "0.02,0.5");
    assert_eq!(lines[4], "0.03,0.25");
}

#[test]
fn test_variance_current_mean() {
    let stdout = run_cli_stdout(&["variance", &fixture("impulse.csv"), "0.5", "-d", "1"]);
    assert!(stdout.starts_with("time,var_0.5_d1\n"));
    let values = last_column(&stdout);
    assert_eq!(values[2], 0.125);
    assert_eq!(values[3], 0.09375);
}

#[test]
fn test_hos_matches_reference_values() {
    let stdout = run_cli_stdout(&["hos", &fixture("impulse.csv"), "0.5"]);
    assert!(stdout.starts_with("time,hos4_0.5_d0\n"));
    let values = last_column(&stdout);
    assert_close(
        &values[2..6],
        &[1.771_626_30, 1.090_613_15, 5.833_565_15e-1, 3.000_029_19e-1],
    );
}

#[test]
fn test_hos_naive_and_fast_agree() {
    let path = fixture("impulse.csv");
    let fast = last_column(&run_cli_stdout(&["hos", &path, "0.5", "-n", "8", "-d", "1"]));
    let naive = last_column(&run_cli_stdout(&[
        "hos", &path, "0.5", "-n", "8", "-d", "1", "--naive",
    ]));
    assert_close(&fast[2..], &naive[2..]);
    assert!((fast[2] - 3.2768).abs() < 1e-9);
}

#[test]
fn test_output_file() {
    let output = std::env::temp_dir().join("rhos_cli_test_mean_output.csv");
    let result = run_cli(&[
        "mean",
        &fixture("impulse.csv"),
        "0.5",
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(result.status.success(), "CLI should succeed");
    assert!(result.stdout.is_empty(), "nothing on stdout when writing a file");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("time,mean_0.5\n"));
    assert_eq!(content.lines().count(), 21);
    fs::remove_file(&output).ok();
}

#[test]
fn test_explicit_column() {
    let stdout = run_cli_stdout(&["mean", &fixture("station.csv"), "0.5", "-c", "HHE"]);
    let values = last_column(&stdout);
    assert_eq!(stdout.lines().next(), Some("mean_0.5"));
    assert_eq!(values[5], 0.25);
}

#[test]
fn test_quoted_time_cells_survive() {
    let stdout = run_cli_stdout(&["mean", &fixture("quoted_time.csv"), "0.5"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "time,mean_0.5");
    assert_eq!(lines[3], "\"2024-01-01, 00:00:02\",0.5");

    let parsed = parse_csv_from_reader(stdout.as_bytes()).unwrap();
    assert_eq!(parsed.headers, vec!["time", "mean_0.5"]);
    assert_eq!(parsed.cells[0][3], "2024-01-01, 00:00:03");
    assert_eq!(parsed.signal(None).unwrap().samples, vec![0.0, 0.0, 0.5, 0.25]);
}

#[test]
fn test_unknown_column_fails() {
    let output = run_cli(&["mean", &fixture("station.csv"), "0.5", "-c", "HHN"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no column named 'HHN'"), "stderr: {stderr}");
    assert!(stderr.contains("station, HHE, HHZ"), "stderr: {stderr}");
}

#[test]
fn test_ambiguous_columns_fail() {
    let output = run_cli(&["mean", &fixture("station.csv"), "0.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HHE, HHZ"), "stderr: {stderr}");
}

#[test]
fn test_invalid_decay_fails() {
    let output = run_cli(&["mean", &fixture("impulse.csv"), "1.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid decay constant"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_definition_fails() {
    let output = run_cli(&["variance", &fixture("impulse.csv"), "0.5", "-d", "2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'definition'"), "stderr: {stderr}");
}

#[test]
fn test_zero_order_fails() {
    let output = run_cli(&["hos", &fixture("impulse.csv"), "0.5", "-n", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid order"), "stderr: {stderr}");
}

#[test]
fn test_malformed_number_reports_line() {
    let output = run_cli(&["mean", &fixture("invalid.csv"), "0.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 4"), "stderr: {stderr}");
}

#[test]
fn test_empty_signal_fails() {
    let output = run_cli(&["mean", &fixture("header_only.csv"), "0.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty input"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_fails() {
    let output = run_cli(&["mean", "/nonexistent/trace.csv", "0.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/trace.csv"), "stderr: {stderr}");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run_cli(&["mean", &fixture("impulse.csv"), "0.5", "--verbose"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with("time,mean_0.5\n"));
    assert!(stderr.contains("read signal"), "stderr: {stderr}");
}

#[test]
fn test_help() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mean"));
    assert!(stdout.contains("variance"));
    assert!(stdout.contains("hos"));
}
