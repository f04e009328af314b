//! Process-level tests for the zeebe-bridge binary.
//!
//! The engine library is deliberately absent, so these cover the argument
//! surface and the failure paths that run before any foreign call.

use std::process::Command;

fn bridge_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_zeebe-bridge"));
    // Run from a directory with no config file and no ./go library
    command.current_dir(std::env::temp_dir());
    command
}

#[test]
fn missing_operation_prints_usage_and_fails() {
    let output = bridge_command().output().expect("failed to run zeebe-bridge");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "usage text missing: {stderr}");
    assert!(
        stderr.contains("zeebe-bridge"),
        "program name missing from usage: {stderr}"
    );
    // Nothing ran past argument parsing, so no load failure was reported
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.is_empty(), "unexpected output: {stdout}");
}

#[test]
fn unknown_operation_is_rejected_before_dispatch() {
    let output = bridge_command()
        .arg("observe")
        .output()
        .expect("failed to run zeebe-bridge");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown operation"),
        "rejection missing: {stderr}"
    );
    assert!(stderr.contains("observe"), "bad name missing: {stderr}");
}

#[test]
fn help_lists_the_operation_names() {
    let output = bridge_command()
        .arg("--help")
        .output()
        .expect("failed to run zeebe-bridge");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["subscribe", "deployWorkflow", "startWorkflowInstance"] {
        assert!(stdout.contains(name), "{name} missing from help: {stdout}");
    }
}

#[test]
fn valid_operation_without_library_surfaces_load_error() {
    let output = bridge_command()
        .arg("deployWorkflow")
        .output()
        .expect("failed to run zeebe-bridge");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    // The load failure is logged through the fmt subscriber on stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("zeebe-go"),
        "load failure not surfaced: {stdout}"
    );
}

#[test]
fn unreadable_explicit_config_is_an_error() {
    let output = bridge_command()
        .args(["subscribe", "--config", "./no-such-bridge-config.toml"])
        .output()
        .expect("failed to run zeebe-bridge");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration error"),
        "config failure not surfaced: {stdout}"
    );
}
