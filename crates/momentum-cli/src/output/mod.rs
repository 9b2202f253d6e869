//! Output formatting helpers for the CLI.
//!
//! JSON payload builders shared by the `--json` arms of the command
//! handlers.

mod json;

// Re-export public API
pub use json::{dashboard_json, habits_json, task_json, tasks_json};
