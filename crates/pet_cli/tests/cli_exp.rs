use std::process::Command;

use serde_json::Value;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_preview-exp"))
        .args(args)
        .output()
        .expect("failed to run preview-exp")
}

#[test]
fn defaults_report_the_tuning_example() {
    let output = run_cli(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "estimated_exp=85");
}

#[test]
fn explicit_inputs_override_defaults() {
    let output = run_cli(&[
        "--active-minutes",
        "10",
        "--input-events",
        "100",
        "--daily-cap",
        "300",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "estimated_exp=25");
}

#[test]
fn daily_cap_limits_the_estimate() {
    let output = run_cli(&["--active-minutes", "400", "--input-events", "0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "estimated_exp=300");
}

#[test]
fn stage_flag_appends_the_derived_stage() {
    let output = run_cli(&["--stage"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["estimated_exp=85", "stage=Baby"]);
}

#[test]
fn high_activity_reaches_the_adult_stage() {
    let output = run_cli(&["--active-minutes", "120", "--input-events", "0", "--stage"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["estimated_exp=240", "stage=Adult"]);
}

#[test]
fn json_mode_reports_inputs_and_estimate() {
    let output = run_cli(&["--json", "--stage"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["active_minutes"], 30);
    assert_eq!(json["input_events"], 500);
    assert_eq!(json["daily_cap"], 300);
    assert_eq!(json["estimated_exp"], 85);
    assert_eq!(json["stage"], "Baby");
}

#[test]
fn json_mode_without_stage_flag_omits_the_stage() {
    let output = run_cli(&["--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert!(json.get("stage").is_none());
}

#[test]
fn rejects_non_integer_minutes() {
    let output = run_cli(&["--active-minutes", "abc"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--active-minutes"));
}

#[test]
fn rejects_negative_event_counts() {
    let output = run_cli(&["--input-events", "-5"]);
    assert!(!output.status.success());
}
