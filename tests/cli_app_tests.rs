//! End-to-end tests for `shortkeys app` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_app_list_missing_store_is_empty() {
    let (store, temp_dir) = empty_store_path();

    let output = run_with_store(&temp_dir, &store, &["app", "list"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Missing store should list as empty. stderr: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).contains("No applications defined"));
    assert!(!store.exists(), "Listing must not create the store file");
}

#[test]
fn test_app_list_json_format() {
    let (store, temp_dir) = create_temp_store_file(&sample_apps());

    let output = run_with_store(&temp_dir, &store, &["app", "list", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("Should parse JSON output");
    assert_eq!(result["count"], 2);
    assert_eq!(result["apps"][0]["process_name"], "code.exe");
    assert_eq!(result["apps"][0]["shortcuts"], 3);
    assert_eq!(result["apps"][0]["bound"], 2);
    assert_eq!(result["apps"][1]["name"], "Chrome");
}

// ============================================================================
// Add Command Tests
// ============================================================================

#[test]
fn test_app_add_creates_store_file() {
    let (store, temp_dir) = empty_store_path();

    let output = run_with_store(
        &temp_dir,
        &store,
        &["app", "add", "--name", "Slack", "--process", "  Slack.EXE "],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("slack.exe"));

    let apps = read_store(&store);
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].process_name, "slack.exe");
    assert_eq!(apps[0].name, "Slack");
    assert!(apps[0].shortcuts.is_empty());
}

#[test]
fn test_app_add_duplicate_fails() {
    let (store, temp_dir) = create_temp_store_file(&sample_apps());

    let output = run_with_store(
        &temp_dir,
        &store,
        &["app", "add", "--name", "Code Again", "--process", "CODE.exe"],
    );

    assert_eq!(output.status.code(), Some(1), "Duplicate should be a validation error");
    assert!(stderr_of(&output).contains("code.exe"));
    assert_eq!(read_store(&store), sample_apps(), "Store must be unchanged");
}

#[test]
fn test_app_add_blank_name_fails() {
    let (store, temp_dir) = empty_store_path();

    let output = run_with_store(
        &temp_dir,
        &store,
        &["app", "add", "--name", "   ", "--process", "x.exe"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!store.exists());
}

// ============================================================================
// Rename / Delete Command Tests
// ============================================================================

#[test]
fn test_app_rename() {
    let (store, temp_dir) = create_temp_store_file(&sample_apps());

    let output = run_with_store(
        &temp_dir,
        &store,
        &["app", "rename", "--process", "chrome.exe", "--name", "Google Chrome"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let apps = read_store(&store);
    assert_eq!(apps[1].name, "Google Chrome");
    assert_eq!(apps[1].shortcuts.len(), 2, "Shortcuts survive a rename");
}

#[test]
fn test_app_rename_unknown_fails() {
    let (store, temp_dir) = create_temp_store_file(&sample_apps());

    let output = run_with_store(
        &temp_dir,
        &store,
        &["app", "rename", "--process", "nope.exe", "--name", "Nope"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("nope.exe"));
}

#[test]
fn test_app_delete_removes_app_and_shortcuts() {
    let (store, temp_dir) = create_temp_store_file(&sample_apps());

    let output = run_with_store(&temp_dir, &store, &["app", "delete", "--process", "code.exe"]);

    assert_eq!(output.status.code(), Some(0));
    let apps = read_store(&store);
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].process_name, "chrome.exe");
}

#[test]
fn test_app_delete_missing_is_not_an_error() {
    let (store, temp_dir) = create_temp_store_file(&sample_apps());

    let output = run_with_store(&temp_dir, &store, &["app", "delete", "--process", "nope.exe"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("nothing deleted"));
    assert_eq!(read_store(&store).len(), 2);
}

#[test]
fn test_app_corrupt_store_is_io_error() {
    let (store, temp_dir) = empty_store_path();
    std::fs::write(&store, "{ not json").unwrap();

    let output = run_with_store(&temp_dir, &store, &["app", "list"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to load store"));
}

#[test]
fn test_process_name_is_case_insensitive_across_commands() {
    let (store, temp_dir) = empty_store_path();

    let output = run_with_store(
        &temp_dir,
        &store,
        &["app", "add", "--name", "Notepad", "--process", "Notepad.EXE"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let output = run_with_store(
        &temp_dir,
        &store,
        &["shortcut", "add", "--app", "NOTEPAD.exe", "--name", "Save", "--keys", "Ctrl+S"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let apps = read_store(&store);
    assert_eq!(apps[0].process_name, "notepad.exe");
    let id = apps[0].shortcuts[0].id.clone();

    let output = run_with_store(
        &temp_dir,
        &store,
        &["shortcut", "edit", "--app", " Notepad.Exe ", "--id", &id, "--keys", "Ctrl+Shift+S"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let apps = read_store(&store);
    assert_eq!(apps[0].shortcuts[0].shortcut.as_ref().unwrap().to_string(), "Ctrl + Shift + S");

    let output = run_with_store(&temp_dir, &store, &["app", "delete", "--process", "NOTEPAD.EXE"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout_of(&output).contains("nothing deleted"));
    assert!(read_store(&store).is_empty());
}
