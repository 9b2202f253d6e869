//! Command handlers for the Momentum CLI.

pub mod dashboard;
pub mod export;
pub mod habits;
pub mod misc;
pub mod tasks;
