use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, store::*};

#[cfg(test)]
mod config_tests {
    use super::*;
    use inventory_manager::core::{repository::ProductRepository, storage::FileStorage};

    #[test]
    fn test_configured_data_dir() -> anyhow::Result<()> {
        let store = setup_test_store()?;
        let configured = store.temp_dir.path().join("configured");
        store.write_config(&format!(
            r#"{{ "data_dir": {} }}"#,
            serde_json::to_string(&configured)?
        ))?;

        store.bare_command()?.arg("seed").assert().success();

        let products = ProductRepository::load(FileStorage::new(&configured)).list_all();
        assert_eq!(products.len(), 3);
        assert!(store.products().is_empty());
        Ok(())
    }

    #[test]
    fn test_data_dir_flag_overrides_config() -> anyhow::Result<()> {
        let store = setup_test_store()?;
        let configured = store.temp_dir.path().join("configured");
        store.write_config(&format!(
            r#"{{ "data_dir": {} }}"#,
            serde_json::to_string(&configured)?
        ))?;

        store.command()?.arg("seed").assert().success();

        assert_eq!(store.products().len(), 3);
        assert!(!configured.exists());
        Ok(())
    }

    #[test]
    fn test_default_data_dir_follows_xdg() -> anyhow::Result<()> {
        let store = setup_test_store()?;

        store.bare_command()?.arg("seed").assert().success();

        let default_dir = store
            .temp_dir
            .path()
            .join("xdg-data")
            .join("inventory-manager");
        let products = ProductRepository::load(FileStorage::new(default_dir)).list_all();
        assert_eq!(products.len(), 3);
        Ok(())
    }

    #[test]
    fn test_configured_storage_key() -> anyhow::Result<()> {
        let store = setup_test_store()?;
        store.write_config(r#"{ "storage_key": "warehouse" }"#)?;

        store.command()?.arg("seed").assert().success();

        assert!(store.products().is_empty());
        let warehouse = ProductRepository::load_with_key(store.storage(), "warehouse");
        assert_eq!(warehouse.len(), 3);
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_reported() -> anyhow::Result<()> {
        let store = setup_test_store()?;
        store.write_config("{ not json")?;

        store
            .command()?
            .arg("list")
            .assert()
            .failure()
            .stdout(assertions::has_error("Failed to parse config file"));

        Ok(())
    }

    #[test]
    fn test_debug_flag_enables_debug_logging() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["--debug", "list"])
            .assert()
            .success()
            .stderr(predicate::str::contains("DEBUG"));

        Ok(())
    }

    #[test]
    fn test_unwritable_data_dir_fails_cleanly() -> anyhow::Result<()> {
        let store = setup_test_store()?;
        let blocked = store.temp_dir.path().join("blocked");
        std::fs::write(&blocked, "")?;

        let mut cmd = store.bare_command()?;
        cmd.arg("--data-dir")
            .arg(blocked.join("data"))
            .arg("seed")
            .assert()
            .failure()
            .stdout(assertions::has_error("Failed to create storage directory"));

        Ok(())
    }
}
