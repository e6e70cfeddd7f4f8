//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. The dev data
//! directory is used so the user's real config is never touched.

use std::path::PathBuf;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dayplan-cli", "--"])
        .args(args)
        .env("DAYPLAN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Write a tasks file into the temp dir and return its path.
fn write_tasks_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dayplan-test-{name}-{}.toml", std::process::id()));
    std::fs::write(&path, content).expect("write tasks file");
    path
}

const TASKS: &str = r#"
[[tasks]]
title = "Deep work"
duration_min = 60
importance = 5

[[tasks]]
title = "Reply to mails"
duration_min = 30
importance = 3
due = "2026-08-31"
"#;

#[test]
fn test_sample_output_is_valid_toml() {
    let (stdout, _, code) = run_cli(&["sample"]);
    assert_eq!(code, 0, "sample failed");
    let parsed: toml::Value = toml::from_str(&stdout).expect("sample output parses as TOML");
    let tasks = parsed.get("tasks").and_then(|t| t.as_array()).unwrap();
    assert_eq!(tasks.len(), 3);
}

#[test]
fn test_plan_generate_text() {
    let path = write_tasks_file("plan-text", TASKS);
    let (stdout, stderr, code) = run_cli(&[
        "plan",
        "generate",
        "--tasks",
        path.to_str().unwrap(),
        "--date",
        "2026-08-31",
    ]);
    assert_eq!(code, 0, "plan generate failed: {stderr}");
    assert!(stdout.contains("Plan for 2026-08-31"));
    assert!(stdout.contains("Deep work"));
    assert!(stdout.contains("available "));
}

#[test]
fn test_plan_generate_json() {
    let path = write_tasks_file("plan-json", TASKS);
    let (stdout, stderr, code) = run_cli(&[
        "plan",
        "generate",
        "--tasks",
        path.to_str().unwrap(),
        "--date",
        "2026-08-31",
        "--block",
        "09:00-12:00",
        "--json",
    ]);
    assert_eq!(code, 0, "plan generate --json failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("plan JSON parses");
    assert_eq!(parsed["schedule"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["meta"]["total_available_min"], 180);
    assert!(parsed["overflow"].as_array().unwrap().is_empty());
}

#[test]
fn test_quadrant_show() {
    let path = write_tasks_file("quadrant", TASKS);
    let (stdout, stderr, code) = run_cli(&[
        "quadrant",
        "show",
        "--tasks",
        path.to_str().unwrap(),
        "--date",
        "2026-08-31",
    ]);
    assert_eq!(code, 0, "quadrant show failed: {stderr}");
    assert!(stdout.contains("## Q2 important, not urgent"));
    assert!(stdout.contains("Deep work (60m)"));
    // "Reply to mails" is due on the reference date: Q3.
    assert!(stdout.contains("## Q3 urgent, not important"));
    assert!(stdout.contains("Reply to mails (30m)"));
}

#[test]
fn test_plan_missing_tasks_file_fails() {
    let (_, stderr, code) = run_cli(&[
        "plan",
        "generate",
        "--tasks",
        "/nonexistent/dayplan-tasks.toml",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_plan_invalid_task_fails_validation() {
    let path = write_tasks_file(
        "invalid",
        "[[tasks]]\ntitle = \"bad\"\nduration_min = 0\nimportance = 3\n",
    );
    let (_, stderr, code) = run_cli(&["plan", "generate", "--tasks", path.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("duration_min"));
}

#[test]
fn test_config_get() {
    let (stdout, stderr, code) = run_cli(&["config", "get", "importance_threshold"]);
    assert_eq!(code, 0, "config get failed: {stderr}");
    assert_eq!(stdout.trim(), "4");
}

#[test]
fn test_config_set_rejects_out_of_range() {
    let (_, stderr, code) = run_cli(&["config", "set", "importance_threshold", "9"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("importance_threshold"));
}

#[test]
fn test_config_show_is_toml() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0);
    let parsed: toml::Value = toml::from_str(&stdout).expect("config show parses as TOML");
    assert!(parsed.get("buffer_ratio").is_some());
}
