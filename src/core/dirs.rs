use crate::core::error::{InventoryError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "inventory-manager";

/// Directory holding `config.json`. `XDG_CONFIG_HOME` wins on every platform.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => dirs::home_dir()
                .map(|home| home.join(".config"))
                .ok_or(InventoryError::StorageDirectoryNotFound)?,
            _ => dirs::config_dir().ok_or(InventoryError::StorageDirectoryNotFound)?,
        },
    };

    Ok(base.join(APP_DIR))
}

/// Default directory for storage slots. `XDG_DATA_HOME` wins on every platform.
pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::var("XDG_DATA_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => dirs::home_dir()
                .map(|home| home.join(".local/share"))
                .ok_or(InventoryError::StorageDirectoryNotFound)?,
            _ => dirs::data_dir().ok_or(InventoryError::StorageDirectoryNotFound)?,
        },
    };

    Ok(base.join(APP_DIR))
}
