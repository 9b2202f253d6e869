//! Preference storage backends.
//!
//! - **traits**: `PreferenceStore` and the `PrefValue` slot type
//! - **json_file**: durable single-file JSON backend
//! - **memory**: in-memory backend for tests and ephemeral runs

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{PrefValue, PreferenceStore};
