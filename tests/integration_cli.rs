//! Integration tests for the `gestalt` binary.
//!
//! These tests verify that failures reach the user as readable messages:
//! - Empty comparison input
//! - Rejected batch configuration

use std::process::{Command, Output};

fn gestalt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gestalt"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn compare_reports_empty_input_message() {
    let output = gestalt(&["compare", "  ", "X"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Both strings must have at least 1 character"), "{stderr}");
    assert!(!stderr.contains("EmptyInput"), "{stderr}");
}

#[test]
fn validate_reports_bad_failure_chance_without_starting() {
    let output = gestalt(&["validate", "-n", "10", "-f", "1.5", "-s", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("Invalid failure chance: 1.5 (must be between 0 and 1)"),
        "{stderr}"
    );
    assert!(!stderr.contains("Starting License Plate Similarity Tests"), "{stderr}");
}

#[test]
fn compare_succeeds_on_plates() {
    let output = gestalt(&["compare", "--output", "minimal", "MH12AB1234", "MH12AB1235"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "90.00");
}
