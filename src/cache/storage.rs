//! Slot Storage Module
//!
//! Client-local key-value storage for the persisted cache slot.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{PokedexError, Result};

// == Slot Storage Trait ==
/// Named string slots that outlive a single fetcher.
pub trait SlotStorage: Send + Sync + fmt::Debug {
    /// Returns the slot contents, or None if it was never written.
    fn load(&self, slot: &str) -> Result<Option<String>>;

    /// Overwrites the slot.
    fn save(&self, slot: &str, value: &str) -> Result<()>;

    /// Removes the slot. Removing a missing slot is not an error.
    fn remove(&self, slot: &str) -> Result<()>;
}

// == Memory Storage ==
/// Slots held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| PokedexError::Storage("slot map lock poisoned".to_string()))?;
        Ok(slots.get(slot).cloned())
    }

    fn save(&self, slot: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| PokedexError::Storage("slot map lock poisoned".to_string()))?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| PokedexError::Storage("slot map lock poisoned".to_string()))?;
        slots.remove(slot);
        Ok(())
    }
}

// == File Storage ==
/// One JSON file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl SlotStorage for FileStorage {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(slot, err)),
        }
    }

    fn save(&self, slot: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|err| storage_error(slot, err))?;

        // Write then rename so readers never see a half-written slot
        let path = self.slot_path(slot);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|err| storage_error(slot, err))?;
        fs::rename(&tmp, &path).map_err(|err| storage_error(slot, err))?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(slot, err)),
        }
    }
}

fn storage_error(slot: &str, err: io::Error) -> PokedexError {
    PokedexError::Storage(format!("slot '{}': {}", slot, err))
}
