//! User configuration.
//!
//! Read from `<config dir>/config.json` when present. Every field is optional;
//! a missing file means defaults. The file is never written by the tool.
//!
//! ```json
//! { "data_dir": "/home/me/inventory", "storage_key": "products" }
//! ```

use crate::core::dirs::{get_config_directory, get_data_directory};
use crate::core::error::{InventoryError, Result};
use crate::core::repository::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Directory holding the storage slots
    pub data_dir: Option<PathBuf>,
    /// Slot the product collection is stored under
    pub storage_key: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl InventoryConfig {
    /// Load `config.json` from the config directory, or defaults
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join("config.json");
        Self::load_from(&config_file)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| InventoryError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Slot directory: `override_dir`, then the configured one, then the default
    pub fn resolve_data_dir(&self, override_dir: Option<PathBuf>) -> Result<PathBuf> {
        match override_dir.or_else(|| self.data_dir.clone()) {
            Some(dir) => Ok(dir),
            None => get_data_directory(),
        }
    }
}
