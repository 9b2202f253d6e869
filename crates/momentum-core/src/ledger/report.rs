//! Plain-text report rendering.

use chrono::{DateTime, Utc};

use super::types::{HabitEntry, ProgressCounters, MAX_PROGRESS};

/// Render the fixed-format habit report.
///
/// Habits appear in stored order, one bullet per line, followed by the
/// two counters. Tasks are deliberately absent: the report covers the
/// habit side only. No trailing newline.
pub fn render_report(habits: &[HabitEntry], counters: ProgressCounters) -> String {
    let mut report = String::from("Habit Tracker Report\n====================\n\n");
    for habit in habits {
        report.push_str("\u{2022} ");
        report.push_str(&habit.name);
        report.push('\n');
    }
    report.push_str(&format!(
        "\nProgress: {} / {}",
        counters.progress, MAX_PROGRESS
    ));
    report.push_str(&format!("\nCurrent Streak: {} Days", counters.streak));
    report
}

/// Default filename for a written report, stamped with unix millis.
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!("Habit_Report_{}.txt", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_matches_fixed_template() {
        let habits = vec![HabitEntry::new("Read"), HabitEntry::new("Gym")];
        let counters = ProgressCounters {
            progress: 12,
            streak: 4,
        };

        let report = render_report(&habits, counters);
        assert_eq!(
            report,
            "Habit Tracker Report\n====================\n\n\u{2022} Read\n\u{2022} Gym\n\nProgress: 12 / 30\nCurrent Streak: 4 Days"
        );
    }

    #[test]
    fn test_report_has_no_trailing_newline() {
        let habits = vec![HabitEntry::new("Read")];
        let counters = ProgressCounters {
            progress: 0,
            streak: 0,
        };
        assert!(!render_report(&habits, counters).ends_with('\n'));
    }

    #[test]
    fn test_file_name_uses_unix_millis() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(
            report_file_name(now),
            format!("Habit_Report_{}.txt", now.timestamp_millis())
        );
        assert!(report_file_name(now).ends_with(".txt"));
    }
}
