//! JSON output formatting for tracker state.

use momentum_core::ledger::{HabitEntry, HabitProgress, ProgressCounters, TaskEntry, TaskProgress};

/// Habit list payload: names in stored order plus the counters.
pub fn habits_json(habits: &[HabitEntry], counters: ProgressCounters) -> serde_json::Value {
    serde_json::json!({
        "habits": habits,
        "progress": counters.progress,
        "streak": counters.streak,
    })
}

/// Convert a task to JSON for output.
pub fn task_json(task: &TaskEntry) -> serde_json::Value {
    serde_json::json!({
        "name": task.name,
        "completed": task.is_completed,
    })
}

/// Task list payload in stored order.
pub fn tasks_json(tasks: &[TaskEntry]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = tasks.iter().map(task_json).collect();
    serde_json::json!({ "tasks": entries })
}

/// Dashboard payload with both progress blocks.
pub fn dashboard_json(habit: &HabitProgress, tasks: &TaskProgress) -> serde_json::Value {
    serde_json::json!({
        "habit": habit,
        "tasks": tasks,
    })
}
