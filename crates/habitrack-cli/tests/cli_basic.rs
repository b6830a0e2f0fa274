//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitrack"))
        .args(args)
        .env("HABITRACK_HOME", home)
        .env_remove("HABITRACK_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

fn listed_names(home: &Path, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let stdout = run_cli_success(home, &args);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("list --json output");
    parsed
        .as_array()
        .expect("array")
        .iter()
        .map(|h| h["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_first_run_seeds_sample_habits() {
    let home = tempfile::tempdir().unwrap();
    let names = listed_names(home.path(), &[]);
    assert_eq!(names.len(), 5);
    assert!(names.contains(&"Exercise".to_string()));
    assert!(home.path().join("habit_data.json").exists());
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_seeding_can_be_disabled() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "store.seed_predefined", "false"]);
    assert!(listed_names(home.path(), &[]).is_empty());
}

#[test]
fn test_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["add", "Meditate", "--description", "Ten minutes", "--periodicity", "weekly"],
    );
    assert!(out.contains("Meditate habit added"));

    let weekly = listed_names(home.path(), &["--periodicity", "weekly"]);
    assert!(weekly.contains(&"Meditate".to_string()));
    assert!(weekly.contains(&"Learn a new Language".to_string()));
    assert!(!weekly.contains(&"Exercise".to_string()));
}

#[test]
fn test_add_rejects_unknown_periodicity() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["add", "Swim", "--periodicity", "monthly"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown periodicity"));
}

#[test]
fn test_complete_twice_same_day() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["add", "Stretch"]);

    let first = run_cli_success(home.path(), &["complete", "Stretch"]);
    assert!(first.contains("Task for Stretch habit completed."));

    let second = run_cli_success(home.path(), &["complete", "Stretch"]);
    assert!(second.contains("already completed"));

    let streak = run_cli_success(home.path(), &["streak", "Stretch"]);
    assert!(streak.contains("Longest streak for Stretch: 1 day"));
}

#[test]
fn test_complete_unknown_habit_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["complete", "Ghost"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Ghost habit not found."));
}

#[test]
fn test_streak_for_unknown_is_zero() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["streak", "Ghost"]);
    assert!(out.contains("Longest streak for Ghost: 0 days"));
}

#[test]
fn test_overall_streak_prints_days() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "store.seed_predefined", "false"]);
    run_cli_success(home.path(), &["add", "Stretch"]);
    run_cli_success(home.path(), &["complete", "Stretch"]);
    let out = run_cli_success(home.path(), &["streak"]);
    assert_eq!(out.trim(), "Longest streak: 1 days");
}

#[test]
fn test_delete_persists() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["add", "Journal"]);
    let out = run_cli_success(home.path(), &["delete", "Journal"]);
    assert!(out.contains("Journal habit deleted."));
    assert!(!listed_names(home.path(), &[]).contains(&"Journal".to_string()));
}

#[test]
fn test_save_to_other_path() {
    let home = tempfile::tempdir().unwrap();
    let export = home.path().join("export.json");
    run_cli_success(home.path(), &["save", "--to", export.to_str().unwrap()]);
    let content = std::fs::read_to_string(&export).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
}

#[test]
fn test_config_get() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["config", "get", "store.file"]);
    assert_eq!(out.trim(), "habit_data.json");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "store.nope"]);
    assert_eq!(code, 1);
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(out.contains("habitrack"));
}
