//! UI primitives for the Momentum CLI.
//!
//! - **context**: Environment detection (TTY, width, color, unicode)
//! - **mode**: Output mode resolution (json, plain, pretty)
//! - **theme**: Badge tokens, symbols, and the color palette
//! - **render**: Headers, badges, key-value lines, meters, tables

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, blank_line, header, hint, kv, meter, print, simple_table, Column};
