//! Data types for the habit and task ledger.

use serde::{Deserialize, Serialize};

/// Preference keys for tracker state.
///
/// These names are an external interface: a namespace written by one
/// build must read back under the next, so they never change.
pub mod keys {
    /// JSON array of habit names, stored as a string slot.
    pub const HABITS: &str = "habits_list";

    /// JSON array of task objects, stored as a string slot.
    pub const TASKS: &str = "daily_tasks_list";

    /// Days-of-consistency counter for the current month.
    pub const PROGRESS: &str = "habit_progress";

    /// Consecutive-days streak counter.
    pub const STREAK: &str = "habit_streak";
}

/// Upper bound for the monthly progress counter.
pub const MAX_PROGRESS: u32 = 30;

/// A tracked habit.
///
/// Serialized transparently, so the stored list is a plain JSON array
/// of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitEntry {
    /// Display name, already trimmed
    pub name: String,
}

impl HabitEntry {
    /// Create a habit entry.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A daily task with its completion flag.
///
/// The completion field serializes as `isCompleted` to keep the stored
/// list readable by earlier builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    /// Display name, already trimmed
    pub name: String,
    /// Whether the task is done for the day
    pub is_completed: bool,
}

impl TaskEntry {
    /// Create a task entry, not yet completed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_completed: false,
        }
    }
}

/// The two habit counters, read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressCounters {
    /// Days marked this month, clamped to `0..=MAX_PROGRESS`
    pub progress: u32,
    /// Consecutive days, never negative, unbounded above
    pub streak: u32,
}

/// Habit progress as a fraction of the monthly goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitProgress {
    /// Days marked this month
    pub progress: u32,
    /// The monthly goal
    pub max: u32,
    /// Whole-number percentage, truncated
    pub percent: u32,
}

/// Task completion stats across the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskProgress {
    /// Tasks marked done
    pub completed: usize,
    /// All tasks, done or not
    pub total: usize,
    /// Whole-number percentage, truncated; zero for an empty list
    pub percent: u32,
}

/// Result of marking the habit day done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Both counters advanced by one day.
    Advanced {
        /// Progress after the advance
        progress: u32,
        /// Streak after the advance
        streak: u32,
    },
    /// Progress already sits at the monthly cap; nothing changed.
    GoalComplete,
    /// There are no habits to mark.
    NoHabits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_list_serializes_as_plain_name_array() {
        let habits = vec![HabitEntry::new("Read"), HabitEntry::new("Gym")];
        let json = serde_json::to_string(&habits).unwrap();
        assert_eq!(json, r#"["Read","Gym"]"#);
    }

    #[test]
    fn test_habit_list_parses_from_plain_name_array() {
        let habits: Vec<HabitEntry> = serde_json::from_str(r#"["Read","Gym"]"#).unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Read");
        assert_eq!(habits[1].name, "Gym");
    }

    #[test]
    fn test_task_serializes_with_camel_case_flag() {
        let task = TaskEntry::new("Laundry");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"name":"Laundry","isCompleted":false}"#);
    }

    #[test]
    fn test_task_parses_camel_case_flag() {
        let task: TaskEntry =
            serde_json::from_str(r#"{"name":"Dishes","isCompleted":true}"#).unwrap();
        assert_eq!(task.name, "Dishes");
        assert!(task.is_completed);
    }

    #[test]
    fn test_new_task_starts_uncompleted() {
        assert!(!TaskEntry::new("Laundry").is_completed);
    }
}
