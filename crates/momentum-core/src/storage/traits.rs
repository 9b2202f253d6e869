//! Preference store abstraction.
//!
//! All tracker state is a handful of typed values under fixed string
//! keys. This module defines the value type and the trait every
//! backend implements.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single stored preference value.
///
/// A slot holds either a string (the serialized habit or task list) or
/// an integer (a counter). Untagged so the namespace file reads as
/// plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    /// An integer slot (counters)
    Int(i64),
    /// A string slot (serialized lists)
    Str(String),
}

/// Key-value preference store interface.
///
/// Implementations persist each mutation before returning, so callers
/// never batch or flush. Typed getters report a mismatch between the
/// requested type and the stored slot as a storage error rather than
/// coercing.
///
/// The trait carries no `Send`/`Sync` bound: a store is owned by
/// exactly one ledger and the tracker is single-threaded.
pub trait PreferenceStore {
    /// Get a string value.
    ///
    /// # Arguments
    ///
    /// * `key` - The preference key
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `MomentumError::Storage` if the key holds an integer.
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Store a string value, replacing any previous value under the key.
    ///
    /// # Errors
    ///
    /// Returns `MomentumError::Storage` if the value cannot be persisted.
    fn put_string(&mut self, key: &str, value: &str) -> Result<()>;

    /// Get an integer value.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `MomentumError::Storage` if the key holds a string.
    fn get_int(&self, key: &str) -> Result<Option<i64>>;

    /// Store an integer value, replacing any previous value under the key.
    ///
    /// # Errors
    ///
    /// Returns `MomentumError::Storage` if the value cannot be persisted.
    fn put_int(&mut self, key: &str, value: i64) -> Result<()>;

    /// Remove a key and its value.
    ///
    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `MomentumError::Storage` if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}
