//! Integration tests for the ledger over the JSON-file store.
//!
//! These exercise the full stack: ledger operations, the namespace
//! wire format on disk, and reopening across store instances.

use std::fs;

use tempfile::tempdir;

use momentum_core::ledger::{keys, MarkOutcome};
use momentum_core::{JsonFileStore, LedgerStore};

#[test]
fn test_ledger_state_survives_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("momentum.json");

    {
        let store = JsonFileStore::open(&path).expect("Failed to open store");
        let mut ledger = LedgerStore::new(store);
        ledger.add_habit("Read").expect("Failed to add habit");
        ledger.add_habit("Gym").expect("Failed to add habit");
        ledger.add_task("Laundry").expect("Failed to add task");
        ledger
            .set_task_completion("Laundry", true)
            .expect("Failed to complete task");
        ledger.mark_habit_done().expect("Failed to mark done");
    }

    let store = JsonFileStore::open(&path).expect("Failed to reopen store");
    let ledger = LedgerStore::new(store);

    let names: Vec<String> = ledger
        .list_habits()
        .expect("Failed to list habits")
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names, vec!["Read", "Gym"]);

    let tasks = ledger.list_tasks().expect("Failed to list tasks");
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].is_completed);

    let counters = ledger.counters().expect("Failed to read counters");
    assert_eq!(counters.progress, 1);
    assert_eq!(counters.streak, 1);
}

#[test]
fn test_namespace_file_uses_stable_wire_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("momentum.json");

    let store = JsonFileStore::open(&path).expect("Failed to open store");
    let mut ledger = LedgerStore::new(store);
    ledger.add_habit("Read").expect("Failed to add habit");
    ledger.add_task("Laundry").expect("Failed to add task");
    ledger.mark_habit_done().expect("Failed to mark done");

    let raw = fs::read_to_string(&path).expect("Failed to read namespace file");
    let namespace: serde_json::Value =
        serde_json::from_str(&raw).expect("Namespace file is not JSON");

    // Lists are serialized blobs inside string slots, not nested JSON.
    let habits_blob = namespace[keys::HABITS]
        .as_str()
        .expect("habits_list slot is not a string");
    let habit_names: Vec<String> =
        serde_json::from_str(habits_blob).expect("habits blob is not a name array");
    assert_eq!(habit_names, vec!["Read"]);

    let tasks_blob = namespace[keys::TASKS]
        .as_str()
        .expect("daily_tasks_list slot is not a string");
    let tasks: serde_json::Value =
        serde_json::from_str(tasks_blob).expect("tasks blob is not JSON");
    assert_eq!(tasks[0]["name"], "Laundry");
    assert_eq!(tasks[0]["isCompleted"], false);

    assert_eq!(namespace[keys::PROGRESS], 1);
    assert_eq!(namespace[keys::STREAK], 1);
}

#[test]
fn test_reads_namespace_written_by_another_build() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("momentum.json");

    let namespace = serde_json::json!({
        "habits_list": "[\"Gym\",\"Read\"]",
        "daily_tasks_list": "[{\"name\":\"Dishes\",\"isCompleted\":true}]",
        "habit_progress": 30,
        "habit_streak": 42,
    });
    fs::write(&path, serde_json::to_string_pretty(&namespace).unwrap())
        .expect("Failed to write namespace file");

    let store = JsonFileStore::open(&path).expect("Failed to open store");
    let mut ledger = LedgerStore::new(store);

    assert_eq!(ledger.list_habits().expect("Failed to list habits").len(), 2);
    assert!(ledger.list_tasks().expect("Failed to list tasks")[0].is_completed);

    let counters = ledger.counters().expect("Failed to read counters");
    assert_eq!(counters.progress, 30);
    assert_eq!(counters.streak, 42);

    // At the cap the mark call is a no-op report.
    assert_eq!(
        ledger.mark_habit_done().expect("Failed to mark done"),
        MarkOutcome::GoalComplete
    );
}

#[test]
fn test_corrupt_namespace_file_is_a_storage_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("momentum.json");
    fs::write(&path, "definitely not json").expect("Failed to write file");

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(err.to_string().contains("Corrupt preference file"));
}

#[test]
fn test_garbage_list_blob_reads_empty_without_poisoning_counters() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("momentum.json");

    let namespace = serde_json::json!({
        "habits_list": "{truncated",
        "habit_progress": 7,
        "habit_streak": 7,
    });
    fs::write(&path, serde_json::to_string(&namespace).unwrap())
        .expect("Failed to write namespace file");

    let store = JsonFileStore::open(&path).expect("Failed to open store");
    let ledger = LedgerStore::new(store);

    assert!(ledger.list_habits().expect("Failed to list habits").is_empty());
    assert_eq!(ledger.counters().expect("Failed to read counters").progress, 7);
}

#[test]
fn test_delete_all_habits_removes_slot_from_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("momentum.json");

    let store = JsonFileStore::open(&path).expect("Failed to open store");
    let mut ledger = LedgerStore::new(store);
    ledger.add_habit("Read").expect("Failed to add habit");
    ledger.mark_habit_done().expect("Failed to mark done");
    ledger.delete_all_habits().expect("Failed to clear habits");

    let raw = fs::read_to_string(&path).expect("Failed to read namespace file");
    let namespace: serde_json::Value =
        serde_json::from_str(&raw).expect("Namespace file is not JSON");

    assert!(namespace.get(keys::HABITS).is_none());
    assert_eq!(namespace[keys::PROGRESS], 0);
    assert_eq!(namespace[keys::STREAK], 0);
}
