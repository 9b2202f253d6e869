//! JSON-file preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{MomentumError, Result};

use super::traits::{PrefValue, PreferenceStore};

/// Durable preference store backed by a single JSON file.
///
/// The whole namespace is one JSON object on disk. Every mutation
/// rewrites the file through a temp file and a rename, so a crash
/// leaves either the old namespace or the new one, never a torn mix.
///
/// The namespace is created lazily: opening a path that does not exist
/// yet yields an empty store, and the file appears on the first write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns `MomentumError::Storage` if the file exists but cannot
    /// be read, or holds anything other than a JSON object of
    /// preference values.
    pub fn open(path: &Path) -> Result<Self> {
        let values = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                MomentumError::Storage(format!(
                    "Corrupt preference file {}: {}",
                    path.display(),
                    err
                ))
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(MomentumError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    err
                )))
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        rename_with_fallback(&temp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
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
        self.persist()
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
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// Atomically rename a file, with fallback for platforms where rename
/// fails if the target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists. Remove the destination and retry; if the
/// retry fails too, clean up the temp file and report both errors.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
