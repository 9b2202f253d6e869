//! The habit and task ledger.
//!
//! `LedgerStore` owns a preference store and carries every operation
//! the tracker supports. All business rules live here; frontends only
//! render outcomes.

mod report;
mod types;

pub use report::{render_report, report_file_name};
pub use types::{
    keys, HabitEntry, HabitProgress, MarkOutcome, ProgressCounters, TaskEntry, TaskProgress,
    MAX_PROGRESS,
};

use tracing::warn;

use crate::error::{MomentumError, Result};
use crate::storage::PreferenceStore;

/// Milestone message for a streak sitting exactly on a milestone.
///
/// Pure lookup; reading it never changes a counter. Fires only on the
/// exact values, so a streak that jumps past one stays quiet.
pub fn milestone_message(streak: u32) -> Option<&'static str> {
    match streak {
        5 => Some("🔥 Great job! You’ve reached a 5-day streak!"),
        10 => Some("💪 Incredible! 10 days strong!"),
        20 => Some("🌟 You’re unstoppable! 20-day streak achieved!"),
        _ => None,
    }
}

/// The tracker ledger over a preference store.
///
/// Habit and task lists are serialized JSON blobs in string slots; the
/// two counters are integer slots. Every mutation persists before the
/// call returns. There are no cross-slot transactions, so multi-slot
/// operations are a sequence of independent writes.
pub struct LedgerStore<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> LedgerStore<S> {
    /// Wrap a preference store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the ledger and hand back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- Habits ---

    /// All habits in insertion order.
    pub fn list_habits(&self) -> Result<Vec<HabitEntry>> {
        self.read_list(keys::HABITS)
    }

    /// Append a habit to the list.
    ///
    /// The name is trimmed first; a blank result is a validation error.
    /// Duplicate names are allowed and kept as separate entries.
    pub fn add_habit(&mut self, name: &str) -> Result<HabitEntry> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(MomentumError::Validation(
                "Habit name must not be empty".to_string(),
            ));
        }

        let mut habits = self.list_habits()?;
        let entry = HabitEntry::new(trimmed);
        habits.push(entry.clone());
        self.write_list(keys::HABITS, &habits)?;
        Ok(entry)
    }

    /// Remove every habit and zero both counters.
    ///
    /// Tasks are untouched. Three independent writes, in this order:
    /// the habit slot is removed, then each counter is set to zero.
    pub fn delete_all_habits(&mut self) -> Result<()> {
        self.store.remove(keys::HABITS)?;
        self.store.put_int(keys::PROGRESS, 0)?;
        self.store.put_int(keys::STREAK, 0)?;
        Ok(())
    }

    /// Mark the habit day done, advancing both counters by one.
    ///
    /// Counters only move forward here. At the monthly cap the call
    /// reports `GoalComplete` and changes nothing; with no habits it
    /// reports `NoHabits` and changes nothing.
    pub fn mark_habit_done(&mut self) -> Result<MarkOutcome> {
        if self.list_habits()?.is_empty() {
            return Ok(MarkOutcome::NoHabits);
        }

        let counters = self.counters()?;
        if counters.progress >= MAX_PROGRESS {
            return Ok(MarkOutcome::GoalComplete);
        }

        let progress = counters.progress + 1;
        let streak = counters.streak + 1;
        self.store.put_int(keys::PROGRESS, i64::from(progress))?;
        self.store.put_int(keys::STREAK, i64::from(streak))?;
        Ok(MarkOutcome::Advanced { progress, streak })
    }

    /// Zero both counters, keeping the habit list.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.store.put_int(keys::PROGRESS, 0)?;
        self.store.put_int(keys::STREAK, 0)?;
        Ok(())
    }

    // --- Tasks ---

    /// All tasks in insertion order.
    pub fn list_tasks(&self) -> Result<Vec<TaskEntry>> {
        self.read_list(keys::TASKS)
    }

    /// Append a task, not yet completed.
    ///
    /// Same trimming and blank-name rule as habits; duplicates allowed.
    pub fn add_task(&mut self, name: &str) -> Result<TaskEntry> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(MomentumError::Validation(
                "Task name must not be empty".to_string(),
            ));
        }

        let mut tasks = self.list_tasks()?;
        let entry = TaskEntry::new(trimmed);
        tasks.push(entry.clone());
        self.write_list(keys::TASKS, &tasks)?;
        Ok(entry)
    }

    /// Set the completion flag on the first task with this name.
    ///
    /// Later tasks with the same name are untouched. An unknown name is
    /// a no-op, though the list is re-persisted either way. Returns the
    /// updated task, if one matched.
    pub fn set_task_completion(
        &mut self,
        name: &str,
        completed: bool,
    ) -> Result<Option<TaskEntry>> {
        let mut tasks = self.list_tasks()?;
        let mut updated = None;
        for task in tasks.iter_mut() {
            if task.name == name {
                task.is_completed = completed;
                updated = Some(task.clone());
                break;
            }
        }
        self.write_list(keys::TASKS, &tasks)?;
        Ok(updated)
    }

    /// Remove every task with this name.
    ///
    /// Name matching is wider here than in `set_task_completion`, which
    /// stops after the first hit. Returns how many entries went away.
    pub fn delete_task(&mut self, name: &str) -> Result<usize> {
        let tasks = self.list_tasks()?;
        let before = tasks.len();
        let remaining: Vec<TaskEntry> = tasks
            .into_iter()
            .filter(|task| task.name != name)
            .collect();
        let removed = before - remaining.len();
        self.write_list(keys::TASKS, &remaining)?;
        Ok(removed)
    }

    // --- Progress ---

    /// Current counters, clamped into their valid ranges.
    ///
    /// A namespace edited by hand can hold anything; progress clamps to
    /// `0..=MAX_PROGRESS` and streak to non-negative on the way out.
    pub fn counters(&self) -> Result<ProgressCounters> {
        let progress = self.store.get_int(keys::PROGRESS)?.unwrap_or(0);
        let streak = self.store.get_int(keys::STREAK)?.unwrap_or(0);
        Ok(ProgressCounters {
            progress: progress.clamp(0, i64::from(MAX_PROGRESS)) as u32,
            streak: streak.clamp(0, i64::from(u32::MAX)) as u32,
        })
    }

    /// Habit progress with the truncated whole-number percentage.
    pub fn habit_progress(&self) -> Result<HabitProgress> {
        let counters = self.counters()?;
        Ok(HabitProgress {
            progress: counters.progress,
            max: MAX_PROGRESS,
            percent: counters.progress * 100 / MAX_PROGRESS,
        })
    }

    /// Task completion stats with the truncated whole-number percentage.
    ///
    /// An empty list reads as zero percent, not a division error.
    pub fn task_progress(&self) -> Result<TaskProgress> {
        let tasks = self.list_tasks()?;
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.is_completed).count();
        let percent = if total == 0 {
            0
        } else {
            (completed * 100 / total) as u32
        };
        Ok(TaskProgress {
            completed,
            total,
            percent,
        })
    }

    /// Render the habit report, or `None` when there are no habits.
    pub fn export_report(&self) -> Result<Option<String>> {
        let habits = self.list_habits()?;
        if habits.is_empty() {
            return Ok(None);
        }
        let counters = self.counters()?;
        Ok(Some(render_report(&habits, counters)))
    }

    // --- Plumbing ---

    /// Read and parse a serialized list slot.
    ///
    /// An absent slot is an empty list. A blob that no longer parses is
    /// logged and also read as empty; the next write replaces it.
    fn read_list<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.store.get_string(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(err) => {
                warn!(key, error = %err, "stored list is malformed, reading as empty");
                Ok(Vec::new())
            }
        }
    }

    fn write_list<T: serde::Serialize>(&mut self, key: &str, list: &[T]) -> Result<()> {
        let raw = serde_json::to_string(list)?;
        self.store.put_string(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, PrefValue};

    fn ledger() -> LedgerStore<MemoryStore> {
        LedgerStore::new(MemoryStore::new())
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ledger();
        assert!(ledger.list_habits().unwrap().is_empty());
        assert!(ledger.list_tasks().unwrap().is_empty());

        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, 0);
        assert_eq!(counters.streak, 0);
    }

    #[test]
    fn test_add_habit_appends_in_order() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.add_habit("Gym").unwrap();
        ledger.add_habit("Meditate").unwrap();

        let names: Vec<String> = ledger
            .list_habits()
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["Read", "Gym", "Meditate"]);
    }

    #[test]
    fn test_add_habit_trims_whitespace() {
        let mut ledger = ledger();
        let habit = ledger.add_habit("  Read  ").unwrap();
        assert_eq!(habit.name, "Read");
        assert_eq!(ledger.list_habits().unwrap()[0].name, "Read");
    }

    #[test]
    fn test_add_habit_rejects_blank_name() {
        let mut ledger = ledger();
        assert!(matches!(
            ledger.add_habit("   "),
            Err(MomentumError::Validation(_))
        ));
        assert!(ledger.list_habits().unwrap().is_empty());
    }

    #[test]
    fn test_add_habit_allows_duplicate_names() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.add_habit("Read").unwrap();
        assert_eq!(ledger.list_habits().unwrap().len(), 2);
    }

    #[test]
    fn test_repeated_reads_return_identical_sequences() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.add_habit("Gym").unwrap();
        ledger.add_task("Laundry").unwrap();

        assert_eq!(ledger.list_habits().unwrap(), ledger.list_habits().unwrap());
        assert_eq!(ledger.list_tasks().unwrap(), ledger.list_tasks().unwrap());
    }

    #[test]
    fn test_mark_done_advances_both_counters() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();

        let outcome = ledger.mark_habit_done().unwrap();
        assert_eq!(
            outcome,
            MarkOutcome::Advanced {
                progress: 1,
                streak: 1
            }
        );

        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, 1);
        assert_eq!(counters.streak, 1);
    }

    #[test]
    fn test_mark_done_requires_a_habit() {
        let mut ledger = ledger();
        assert_eq!(ledger.mark_habit_done().unwrap(), MarkOutcome::NoHabits);

        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, 0);
        assert_eq!(counters.streak, 0);
    }

    #[test]
    fn test_mark_done_stops_at_monthly_cap() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();

        for _ in 0..MAX_PROGRESS {
            assert!(matches!(
                ledger.mark_habit_done().unwrap(),
                MarkOutcome::Advanced { .. }
            ));
        }

        assert_eq!(ledger.mark_habit_done().unwrap(), MarkOutcome::GoalComplete);

        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, MAX_PROGRESS);
        assert_eq!(counters.streak, MAX_PROGRESS);
    }

    #[test]
    fn test_counters_clamp_stored_out_of_range_values() {
        let mut store = MemoryStore::new();
        store.seed(keys::PROGRESS, PrefValue::Int(99));
        store.seed(keys::STREAK, PrefValue::Int(-3));

        let ledger = LedgerStore::new(store);
        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, MAX_PROGRESS);
        assert_eq!(counters.streak, 0);
    }

    #[test]
    fn test_streak_is_unbounded_above() {
        let mut store = MemoryStore::new();
        store.seed(keys::STREAK, PrefValue::Int(42));

        let ledger = LedgerStore::new(store);
        assert_eq!(ledger.counters().unwrap().streak, 42);
    }

    #[test]
    fn test_reset_progress_zeroes_counters_and_keeps_habits() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.mark_habit_done().unwrap();
        ledger.mark_habit_done().unwrap();

        ledger.reset_progress().unwrap();

        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, 0);
        assert_eq!(counters.streak, 0);
        assert_eq!(ledger.list_habits().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_habits_clears_list_and_counters_but_keeps_tasks() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.add_task("Laundry").unwrap();
        ledger.mark_habit_done().unwrap();

        ledger.delete_all_habits().unwrap();

        assert!(ledger.list_habits().unwrap().is_empty());
        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, 0);
        assert_eq!(counters.streak, 0);
        assert_eq!(ledger.list_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_add_task_appends_uncompleted() {
        let mut ledger = ledger();
        ledger.add_task("Laundry").unwrap();
        ledger.add_task("Dishes").unwrap();

        let tasks = ledger.list_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "Laundry");
        assert!(!tasks[0].is_completed);
        assert_eq!(tasks[1].name, "Dishes");
    }

    #[test]
    fn test_add_task_rejects_blank_name() {
        let mut ledger = ledger();
        assert!(matches!(
            ledger.add_task(""),
            Err(MomentumError::Validation(_))
        ));
        assert!(matches!(
            ledger.add_task(" \t "),
            Err(MomentumError::Validation(_))
        ));
        assert!(ledger.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_set_task_completion_touches_first_match_only() {
        let mut ledger = ledger();
        ledger.add_task("Laundry").unwrap();
        ledger.add_task("Laundry").unwrap();

        let updated = ledger.set_task_completion("Laundry", true).unwrap();
        assert!(updated.is_some());

        let tasks = ledger.list_tasks().unwrap();
        assert!(tasks[0].is_completed);
        assert!(!tasks[1].is_completed);
    }

    #[test]
    fn test_set_task_completion_unknown_name_changes_nothing() {
        let mut ledger = ledger();
        ledger.add_task("Laundry").unwrap();

        let updated = ledger.set_task_completion("Dishes", true).unwrap();
        assert!(updated.is_none());

        let tasks = ledger.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].is_completed);
    }

    #[test]
    fn test_set_task_completion_can_unmark() {
        let mut ledger = ledger();
        ledger.add_task("Laundry").unwrap();
        ledger.set_task_completion("Laundry", true).unwrap();
        ledger.set_task_completion("Laundry", false).unwrap();
        assert!(!ledger.list_tasks().unwrap()[0].is_completed);
    }

    #[test]
    fn test_delete_task_removes_every_match() {
        let mut ledger = ledger();
        ledger.add_task("Laundry").unwrap();
        ledger.add_task("Dishes").unwrap();
        ledger.add_task("Laundry").unwrap();

        let removed = ledger.delete_task("Laundry").unwrap();
        assert_eq!(removed, 2);

        let tasks = ledger.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Dishes");
    }

    #[test]
    fn test_delete_task_unknown_name_removes_nothing() {
        let mut ledger = ledger();
        ledger.add_task("Laundry").unwrap();
        assert_eq!(ledger.delete_task("Dishes").unwrap(), 0);
        assert_eq!(ledger.list_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_task_progress_truncates_percent() {
        let mut ledger = ledger();
        ledger.add_task("a").unwrap();
        ledger.add_task("b").unwrap();
        ledger.add_task("c").unwrap();
        ledger.set_task_completion("a", true).unwrap();

        let progress = ledger.task_progress().unwrap();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent, 33);

        ledger.set_task_completion("b", true).unwrap();
        assert_eq!(ledger.task_progress().unwrap().percent, 66);

        ledger.add_task("d").unwrap();
        ledger.set_task_completion("c", true).unwrap();
        assert_eq!(ledger.task_progress().unwrap().percent, 75);
    }

    #[test]
    fn test_task_progress_empty_list_is_zero_percent() {
        let ledger = ledger();
        let progress = ledger.task_progress().unwrap();
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn test_habit_progress_truncates_percent() {
        let mut store = MemoryStore::new();
        store.seed(keys::PROGRESS, PrefValue::Int(12));

        let ledger = LedgerStore::new(store);
        let progress = ledger.habit_progress().unwrap();
        assert_eq!(progress.progress, 12);
        assert_eq!(progress.max, MAX_PROGRESS);
        assert_eq!(progress.percent, 40);
    }

    #[test]
    fn test_milestone_messages_fire_on_exact_values() {
        assert_eq!(
            milestone_message(5),
            Some("🔥 Great job! You’ve reached a 5-day streak!")
        );
        assert_eq!(milestone_message(10), Some("💪 Incredible! 10 days strong!"));
        assert_eq!(
            milestone_message(20),
            Some("🌟 You’re unstoppable! 20-day streak achieved!")
        );
    }

    #[test]
    fn test_milestones_stay_quiet_between_values() {
        for streak in [0, 1, 4, 6, 9, 11, 19, 21, 25, 30] {
            assert_eq!(milestone_message(streak), None, "streak {}", streak);
        }
    }

    #[test]
    fn test_malformed_habit_blob_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.seed(keys::HABITS, PrefValue::Str("{not a list".to_string()));

        let ledger = LedgerStore::new(store);
        assert!(ledger.list_habits().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_task_blob_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.seed(keys::TASKS, PrefValue::Str("[{\"name\":".to_string()));

        let ledger = LedgerStore::new(store);
        assert!(ledger.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_add_habit_replaces_malformed_blob() {
        let mut store = MemoryStore::new();
        store.seed(keys::HABITS, PrefValue::Str("{not a list".to_string()));

        let mut ledger = LedgerStore::new(store);
        ledger.add_habit("Read").unwrap();

        let habits = ledger.list_habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Read");
    }

    #[test]
    fn test_export_report_none_without_habits() {
        let ledger = ledger();
        assert_eq!(ledger.export_report().unwrap(), None);
    }

    #[test]
    fn test_export_report_includes_habits_and_counters() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.mark_habit_done().unwrap();

        let report = ledger.export_report().unwrap().unwrap();
        assert!(report.starts_with("Habit Tracker Report\n====================\n"));
        assert!(report.contains("\u{2022} Read"));
        assert!(report.contains("Progress: 1 / 30"));
        assert!(report.contains("Current Streak: 1 Days"));
    }

    #[test]
    fn test_list_operations_never_move_counters() {
        let mut ledger = ledger();
        ledger.add_habit("Read").unwrap();
        ledger.mark_habit_done().unwrap();
        ledger.mark_habit_done().unwrap();

        ledger.add_habit("Gym").unwrap();
        ledger.add_task("Laundry").unwrap();
        ledger.set_task_completion("Laundry", true).unwrap();
        ledger.set_task_completion("Laundry", false).unwrap();
        ledger.delete_task("Laundry").unwrap();

        let counters = ledger.counters().unwrap();
        assert_eq!(counters.progress, 2);
        assert_eq!(counters.streak, 2);
    }
}
