//! CLI functional tests for observer-demo
//!
//! These tests spawn the demo binary as a subprocess and inspect its report.

use serde::Deserialize;
use std::process::{Command, Output};

/// Run observer-demo with the given arguments
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_observer-demo"))
        .args(args)
        .output()
        .expect("Failed to execute observer-demo")
}

fn parse_report(output: &Output) -> DemoReport {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON report ({}): {}", e, stdout))
}

// ============================================================================
// Response Types for JSON Parsing
// ============================================================================

#[derive(Debug, Deserialize)]
struct DemoReport {
    policy: String,
    scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Deserialize)]
struct ScenarioReport {
    name: String,
    initial: Vec<String>,
    contents: Vec<String>,
    #[serde(default)]
    change: Option<serde_json::Value>,
    messages: Vec<String>,
    gui_refreshes: usize,
    #[serde(default)]
    error: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_json_report_for_default_run() {
    let output = run_cli(&["--format", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report = parse_report(&output);
    assert_eq!(report.policy, "propagate");
    assert_eq!(report.scenarios.len(), 2);

    let append = &report.scenarios[0];
    assert_eq!(append.name, "append");
    assert_eq!(append.initial, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(append.contents, vec!["1", "2", "3", "4", "5", "23"]);
    assert_eq!(append.messages, vec!["23 added to list"]);
    assert_eq!(append.gui_refreshes, 1);
    assert!(append.error.is_none());

    let change = append.change.as_ref().expect("append change missing");
    assert_eq!(change["type"], "Appended");
    assert_eq!(change["value"], "23");

    let slice = &report.scenarios[1];
    assert_eq!(slice.name, "slice");
    assert_eq!(slice.initial.concat(), "helloWorld!");
    assert_eq!(slice.contents.concat(), "helloJohn!");
    assert_eq!(slice.messages, vec!["item[5:] changed to [J, o, h, n, !]"]);

    let change = slice.change.as_ref().expect("slice change missing");
    assert_eq!(change["type"], "Assigned");
    assert_eq!(change["key"], "5:");
}

#[test]
fn test_text_report_mentions_messages() {
    let output = run_cli(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("23 added to list"));
    assert!(stdout.contains("policy: propagate"));
    assert!(stdout.contains("change: Appended (23 added to list)"));
}

#[test]
fn test_closed_gui_with_propagate_fails() {
    let output = run_cli(&["--format", "json", "--close-gui"]);
    assert!(!output.status.success());

    let report = parse_report(&output);
    for scenario in &report.scenarios {
        assert!(scenario.error.is_some());
        // The recorder is attached after the GUI observer and never hears about the change
        assert!(scenario.messages.is_empty());
    }
    // Mutations are applied even though the broadcast failed
    assert_eq!(report.scenarios[0].contents.len(), 6);
}

#[test]
fn test_closed_gui_with_isolate_still_records() {
    let output = run_cli(&["--format", "json", "--close-gui", "--policy", "isolate"]);
    assert!(!output.status.success());

    let report = parse_report(&output);
    assert_eq!(report.policy, "isolate");
    assert_eq!(report.scenarios[0].messages, vec!["23 added to list"]);
    assert_eq!(report.scenarios[0].gui_refreshes, 0);
}

#[test]
fn test_missing_config_file_exits_with_usage_code() {
    let output = run_cli(&["--config", "/nonexistent/observer-demo.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_policy_rejected() {
    let output = run_cli(&["--policy", "retry"]);
    assert!(!output.status.success());
}
