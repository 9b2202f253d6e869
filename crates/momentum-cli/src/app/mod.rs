//! Application-level utilities for the Momentum CLI.
//!
//! This module provides:
//! - The handler context bundling CLI args with lazy config
//! - Path resolution for the config and store files

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
