//! In-memory preference store.

use std::collections::BTreeMap;

use crate::error::{MomentumError, Result};

use super::traits::{PrefValue, PreferenceStore};

/// Preference store held entirely in memory.
///
/// Nothing touches disk. Used as a test double and for ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a raw value under a key, bypassing the typed setters.
    ///
    /// Lets tests stage malformed blobs or out-of-range counters the
    /// way an older build might have left them.
    pub fn seed(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(PrefValue::Str(value)) => Ok(Some(value.clone())),
            Some(PrefValue::Int(_)) => Err(MomentumError::Storage(format!(
                "Key {} holds an integer, expected a string",
                key
            ))),
        }
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .insert(key.to_string(), PrefValue::Str(value.to_string()));
        Ok(())
    }

    fn get_int(&self, key: &str) -> Result<Option<i64>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(PrefValue::Int(value)) => Ok(Some(*value)),
            Some(PrefValue::Str(_)) => Err(MomentumError::Storage(format!(
                "Key {} holds a string, expected an integer",
                key
            ))),
        }
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.values.insert(key.to_string(), PrefValue::Int(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
