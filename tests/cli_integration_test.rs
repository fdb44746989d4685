//! CLI integration tests for the taskdeck binary.
//! Runs each command against a project in a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ============================================================
// Helper functions
// ============================================================

/// Build an `assert_cmd::Command` pointing at the `taskdeck` binary,
/// with its working directory set to `dir`.
fn taskdeck_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("taskdeck");
    cmd.current_dir(dir);
    for var in [
        "TASKDECK_STORAGE__BACKEND",
        "TASKDECK_STORAGE__PATH",
        "TASKDECK_STORAGE__KEY",
        "TASKDECK_STORAGE__QUOTA_BYTES",
        "TASKDECK_LOGGING__LEVEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn init_project(dir: &Path) {
    taskdeck_cmd(dir).args(["init"]).assert().success();
}

/// Run a command with `--json`, assert success, and return the parsed
/// JSON value from stdout.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = taskdeck_cmd(dir)
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output)
        .unwrap_or_else(|e| panic!("Failed to parse JSON from {args:?}: {e}"))
}

fn add_task(dir: &Path, args: &[&str]) -> String {
    let mut full = vec!["add"];
    full.extend_from_slice(args);
    let value = run_json(dir, &full);
    assert_eq!(value["saved"], true);
    value["task"]["id"].as_str().unwrap().to_string()
}

fn titles(list: &Value) -> Vec<String> {
    list["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================
// Init command tests
// ============================================================

#[test]
fn init_creates_config_and_store() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();

    taskdeck_cmd(dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized taskdeck project"));

    assert!(dir.join(".taskdeck/config.yaml").exists());
    assert!(dir.join(".taskdeck/store").is_dir());

    taskdeck_cmd(dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

// ============================================================
// Task command tests
// ============================================================

#[test]
fn count_and_list_on_empty_project() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_project(dir);

    taskdeck_cmd(dir)
        .args(["count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet"));

    taskdeck_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing here yet"));
}

#[test]
fn add_list_and_sort() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_project(dir);

    add_task(dir, &["Low priority chore", "-p", "low"]);
    add_task(dir, &["Urgent fix", "-p", "high", "--due", "2024-05-01"]);
    add_task(dir, &["Urgent but later", "-p", "high", "--due", "2024-06-01"]);
    let done = add_task(dir, &["Already done", "-p", "high"]);
    run_json(dir, &["toggle", &done]);

    let list = run_json(dir, &["list"]);
    assert_eq!(list["total"], 4);
    assert_eq!(list["activeFilters"], 0);
    assert_eq!(
        titles(&list),
        vec!["Urgent fix", "Urgent but later", "Low priority chore", "Already done"]
    );

    let count = run_json(dir, &["count"]);
    assert_eq!(count["count"], 4);
}

#[test]
fn list_filters_and_counts_active_filters() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_project(dir);

    add_task(dir, &["Write REPORT", "-d", "quarterly numbers", "--due", "2024-03-10"]);
    add_task(dir, &["Groceries", "-d", "milk for the report party", "--due", "2024-04-10"]);
    add_task(dir, &["Call plumber"]);

    let list = run_json(dir, &["list", "-s", "report"]);
    assert_eq!(list["activeFilters"], 1);
    assert_eq!(list["storedTotal"], 3);
    assert_eq!(titles(&list).len(), 2);

    let list = run_json(dir, &["list", "-s", "report", "--from", "2024-04-01"]);
    assert_eq!(list["activeFilters"], 2);
    assert_eq!(titles(&list), vec!["Groceries"]);

    taskdeck_cmd(dir)
        .args(["list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks match the current filters"));
}

#[test]
fn list_rejects_inverted_date_range() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_project(dir);

    taskdeck_cmd(dir)
        .args(["list", "--from", "2024-05-01", "--to", "2024-04-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be later than"));
}

#[test]
fn edit_show_and_delete_by_prefix() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_project(dir);

    let id = add_task(dir, &["Draft", "-d", "first pass", "--due", "2024-01-15"]);
    let prefix = &id[..8];

    let edited = run_json(
        dir,
        &["edit", prefix, "--title", "Final draft", "--clear-description", "-p", "high"],
    );
    assert_eq!(edited["task"]["title"], "Final draft");
    assert_eq!(edited["task"]["priority"], "high");
    assert!(edited["task"].get("description").is_none());
    assert_eq!(edited["task"]["dueDate"], "2024-01-15");

    let shown = run_json(dir, &["show", prefix]);
    assert_eq!(shown["task"]["id"], id.as_str());

    taskdeck_cmd(dir)
        .args(["show", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan 15, 2024"));

    run_json(dir, &["delete", prefix]);
    let count = run_json(dir, &["count"]);
    assert_eq!(count["count"], 0);
}

#[test]
fn unknown_id_and_blank_title_fail() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_project(dir);

    taskdeck_cmd(dir)
        .args(["toggle", "does-not-exist", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Task not found"));

    taskdeck_cmd(dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));

    taskdeck_cmd(dir)
        .args(["add", "Bad date", "--due", "2024-02-30"])
        .assert()
        .failure();
}

#[test]
fn sqlite_backend_via_config_file() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let config = dir.join("taskdeck.yaml");
    std::fs::write(
        &config,
        "storage:\n  backend: sqlite\n  path: data/tasks.db\n",
    )
    .unwrap();
    let config = config.to_string_lossy().to_string();

    add_task(dir, &["Stored in sqlite", "--config", &config]);
    let list = run_json(dir, &["list", "--config", &config]);
    assert_eq!(titles(&list), vec!["Stored in sqlite"]);
    assert!(dir.join("data/tasks.db").exists());
}
