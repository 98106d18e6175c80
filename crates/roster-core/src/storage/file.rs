//! Directory-backed storage: one JSON file per slot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::fs::write_atomic;
use crate::storage::traits::KeyValueStorage;

/// Stores each slot as `<dir>/<key>.json`.
///
/// The directory is created lazily on the first write, so opening a
/// `FileStorage` on a fresh path and reading from it yields empty slots.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    const MAX_KEY_BYTES: usize = 64;

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(RosterError::InvalidInput(
                "Slot key cannot be empty".to_string(),
            ));
        }
        if key.len() > Self::MAX_KEY_BYTES {
            return Err(RosterError::InvalidInput(format!(
                "Slot key too long (max {} bytes)",
                Self::MAX_KEY_BYTES
            )));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(RosterError::InvalidInput(format!(
                "Slot key contains invalid characters: {}",
                key
            )));
        }
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RosterError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            RosterError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        write_atomic(&path, value.as_bytes()).map_err(|e| {
            RosterError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(slot = key, bytes = value.len(), path = %path.display(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(RosterError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}
