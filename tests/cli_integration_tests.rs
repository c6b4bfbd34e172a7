//! Integration tests for chart rendering from the command line.

mod common;

use common::{COLUMN_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Bar Charts
// =============================================================================

#[test]
fn bar_chart_with_labels() {
    term_plot!()
        .args(["--no-config", "-W", "20", "-H", "10"])
        .args(["a", "bb", "c", ",", "3", "7", "2"])
        .assert()
        .success()
        .stdout(
            " a│\x1b[34m■■■■■■\x1b[0m 3\n\
             bb│\x1b[34m■■■■■■■■■■■■■■■\x1b[0m 7\n \
             c│\x1b[34m■■■■\x1b[0m 2\n",
        )
        .stderr("");
}

#[test]
fn bar_chart_without_labels_starts_at_axis() {
    let output = term_plot!()
        .args(["--no-config", "-W", "30", "-H", "10", "1", "2", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|line| line.starts_with('│')));
}

#[test]
fn title_is_bold_and_followed_by_blank_line() {
    term_plot!()
        .args(["--no-config", "-W", "20", "-H", "10", "-t", "Sales", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[1mSales\x1b[0m\n\n│"));
}

// =============================================================================
// Column Charts
// =============================================================================

#[test]
fn column_chart_of_zeros() {
    term_plot!()
        .args(["--no-config", "-c", "col", "-W", "10", "-H", "10", "0", "0"])
        .assert()
        .success()
        .stdout(" 0  0  \n───────\n");
}

#[test]
fn column_chart_with_labels_ends_with_label_row() {
    let output = term_plot!()
        .args(["--no-config", "-c", "column", "-W", "20", "-H", "6"])
        .args(["ab", "c", ",", "1", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().last(), Some(" ab c  "));
}

#[test]
fn too_many_columns_fails_without_output() {
    term_plot!()
        .args(["--no-config", "-c", "column", "-W", "5", "-H", "5", "1", "2", "3"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Too many columns"))
        .stderr(predicate::str::contains("-c bar"));
}

// =============================================================================
// Input Errors
// =============================================================================

#[test]
fn label_count_mismatch_fails() {
    term_plot!()
        .args(["--no-config", "-W", "20", "-H", "10", "a", "b", ",", "1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Number of labels and values must match. Received: 2 labels, 1 values",
        ))
        .stderr(predicate::str::contains("usage: term-plot"));
}

#[test]
fn negative_value_fails() {
    term_plot!()
        .args(["--no-config", "-W", "20", "-H", "10", "1", "-5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Negative value: -5"));
}

#[test]
fn invalid_number_fails() {
    term_plot!()
        .args(["--no-config", "-W", "20", "-H", "10", "1", "x2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid number: x2"));
}

#[test]
fn no_data_fails_with_usage() {
    term_plot!()
        .args(["--no-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No values to plot"));
}

// =============================================================================
// Data Files
// =============================================================================

#[test]
fn csv_file_with_header_and_labels() {
    let fixture = TestFixture::new();
    fixture.create_file("data.csv", "month,sales\njan,3\nfeb,7\nmar,2\n");

    let output = term_plot!()
        .current_dir(fixture.path())
        .args(["--no-config", "-W", "20", "-H", "10", "data.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let labels: Vec<_> = stdout
        .lines()
        .map(|line| line.split('│').next().unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["jan", "feb", "mar"]);
}

#[test]
fn csv_file_with_custom_delimiter() {
    let fixture = TestFixture::new();
    fixture.create_file("DATA.CSV", "x;4\ny;5\n");

    term_plot!()
        .current_dir(fixture.path())
        .args(["--no-config", "-W", "20", "-H", "10", "-d", ";", "DATA.CSV"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x│"))
        .stdout(predicate::str::contains("y│"));
}

#[test]
fn argument_after_csv_file_fails() {
    let fixture = TestFixture::new();
    fixture.create_file("data.csv", "1\n2\n");

    term_plot!()
        .current_dir(fixture.path())
        .args(["--no-config", "-W", "20", "-H", "10", "data.csv", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected argument after data file: 3"));
}

#[test]
fn missing_csv_file_fails() {
    let fixture = TestFixture::new();

    term_plot!()
        .current_dir(fixture.path())
        .args(["--no-config", "-W", "20", "-H", "10", "missing.csv"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read data file"));
}

// =============================================================================
// Warnings and Verbosity
// =============================================================================

#[test]
fn long_labels_warn_on_stderr() {
    term_plot!()
        .args(["--no-config", "-W", "6", "-H", "10", "a-long-label", ",", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a-long-label│"))
        .stderr(predicate::str::contains(
            "⚠ Warning: labels are too long to display chart values proportionally",
        ));
}

#[test]
fn quiet_suppresses_warnings() {
    term_plot!()
        .args(["--no-config", "-q", "-W", "6", "-H", "10", "a-long-label", ",", "5"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn verbose_reports_canvas_and_layout() {
    term_plot!()
        .args(["--no-config", "-v", "-W", "20", "-H", "10", "1", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("config: built-in defaults"))
        .stderr(predicate::str::contains("canvas: 20x10"))
        .stderr(predicate::str::contains("bar: label width 0, glyph budget 17"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn local_config_sets_default_kind_and_colour() {
    let fixture = TestFixture::new();
    fixture.create_config(COLUMN_CONFIG);

    term_plot!()
        .current_dir(fixture.path())
        .args(["-W", "10", "-H", "10", "4", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32m█"))
        .stdout(predicate::str::contains("───"));
}

#[test]
fn no_config_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config(COLUMN_CONFIG);

    term_plot!()
        .current_dir(fixture.path())
        .args(["--no-config", "-W", "20", "-H", "10", "4", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[34m■"));
}

#[test]
fn invalid_local_config_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\nmax_width = 0\n");

    term_plot!()
        .current_dir(fixture.path())
        .args(["-W", "20", "-H", "10", "1"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("max_width"));
}

#[test]
fn explicit_missing_config_exits_with_config_error() {
    let fixture = TestFixture::new();

    term_plot!()
        .current_dir(fixture.path())
        .args(["--config", "nope.toml", "-W", "20", "-H", "10", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn help_lists_exit_codes() {
    term_plot!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}
