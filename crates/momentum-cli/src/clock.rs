//! Date banner formatting for the habit screen.

use chrono::{DateTime, TimeZone};

/// Format a timestamp the way the tracker's clock line shows it,
/// e.g. `Monday, January 15 2024 | 01:05:09 PM`.
pub fn banner<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%A, %B %d %Y | %I:%M:%S %p").to_string()
}
