//! # Momentum Core
//!
//! Core library for Momentum - a local-first habit and daily-task
//! tracker.
//!
//! This crate holds the tracker's data model and business rules,
//! independent of any frontend.
//!
//! ## Architecture
//!
//! - **storage**: Preference store trait and backends (JSON file, memory)
//! - **ledger**: Habit and task operations, counters, milestones, report
//! - **error**: Error types shared across the crate

pub mod error;
pub mod ledger;
pub mod storage;

pub use error::{MomentumError, Result};
pub use ledger::{milestone_message, LedgerStore, MAX_PROGRESS};
pub use storage::{JsonFileStore, MemoryStore, PreferenceStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
