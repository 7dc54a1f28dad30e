//! Throwaway data and config directories
//!
//! [`TestStore`] owns a temporary directory split into `data/` (passed with
//! `--data-dir`) and `config/` (exported as `XDG_CONFIG_HOME`), so tests never
//! touch the real user directories.

#![allow(dead_code)]

use assert_cmd::Command;
use inventory_manager::core::{
    error::Result, product::Product, repository::ProductRepository, storage::FileStorage,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The TempDir must be kept alive for the duration of the test
pub struct TestStore {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl TestStore {
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `inventory` with the store's directories and colors disabled
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("inventory")?;
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .env("XDG_CONFIG_HOME", &self.config_dir)
            .env("XDG_DATA_HOME", self.temp_dir.path().join("xdg-data"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    /// `inventory` without `--data-dir`, relying on config and XDG variables
    pub fn bare_command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("inventory")?;
        cmd.env("XDG_CONFIG_HOME", &self.config_dir)
            .env("XDG_DATA_HOME", self.temp_dir.path().join("xdg-data"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// Load the repository the way the binary does
    pub fn repository(&self) -> ProductRepository<FileStorage> {
        ProductRepository::load(self.storage())
    }

    /// Products currently persisted in the `products` slot
    pub fn products(&self) -> Vec<Product> {
        self.repository().list_all()
    }

    /// Write `config.json` for the binary to pick up
    pub fn write_config(&self, content: &str) -> Result<()> {
        let dir = self.config_dir.join("inventory-manager");
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("config.json"), content)?;
        Ok(())
    }
}

pub fn setup_test_store() -> Result<TestStore> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    let config_dir = temp_dir.path().join("config");

    Ok(TestStore {
        temp_dir,
        data_dir,
        config_dir,
    })
}
