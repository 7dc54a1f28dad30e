//! Key-value slot stores backing the product repository.
//!
//! A slot holds one text blob under one string key, the way browser page
//! storage does. The repository only ever touches a single slot.
//!
//! # Public API
//! - [`Storage`]: get/set/remove a slot
//! - [`MemoryStorage`]: shared in-memory map, used by tests and embedders
//! - [`FileStorage`]: one JSON file per slot under a data directory
//!
//! # File Layout
//! Slot files are named after the md5 digest of their key so that any key maps
//! to a valid file name: `<data dir>/<md5(key)>.json`. A write goes to
//! `<md5(key)>.json.tmp` first and is renamed into place, so a slot file is
//! always either the previous blob or the new one.

use crate::core::error::{InventoryError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub trait Storage {
    /// Read a slot. An absent slot is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot with `value`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory slot store. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already populated
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// Slot store keeping one file per key under `dir`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the slot directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the slot `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let digest = format!("{:x}", md5::compute(key.as_bytes()));
        self.dir.join(format!("{digest}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        log::debug!("Reading slot '{key}' from {}", path.display());

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Slot '{key}' does not exist yet");
                Ok(None)
            }
            Err(e) => {
                log::error!("Failed to read slot file '{}': {}", path.display(), e);
                Err(InventoryError::storage_read_failed(&path, e))
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            log::error!(
                "Failed to create storage directory '{}': {}",
                self.dir.display(),
                e
            );
            return Err(InventoryError::storage_directory_creation_failed(
                &self.dir, e,
            ));
        }

        // Write to a sibling file, then rename over the slot
        let path = self.slot_path(key);
        let temp_path = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&temp_path, value).and_then(|()| fs::rename(&temp_path, &path)) {
            log::error!("Failed to write slot file '{}': {}", path.display(), e);
            let _ = fs::remove_file(&temp_path);
            return Err(InventoryError::storage_write_failed(&path, e));
        }

        log::debug!("Wrote {} bytes to slot '{key}'", value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(InventoryError::storage_write_failed(&path, e)),
        }
    }
}
