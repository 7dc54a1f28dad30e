use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, store::*};

#[cfg(test)]
mod delete_command_tests {
    use super::*;

    #[test]
    fn test_delete_asks_for_confirmation() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "1"])
            .write_stdin("y\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Delete \"Laptop Pro\"? [y/N]"))
            .stdout(assertions::has_success("Deleted 1 product(s). 2 remaining."));

        assert_eq!(
            names(&store.products()),
            vec!["Wireless Headphones", "Coffee Maker"]
        );
        Ok(())
    }

    #[test]
    fn test_delete_declined() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "2"])
            .write_stdin("n\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing deleted."));

        assert_eq!(store.products().len(), 3);
        Ok(())
    }

    #[test]
    fn test_delete_without_answer_is_no() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "3"])
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing deleted."));

        assert_eq!(store.products().len(), 3);
        Ok(())
    }

    #[test]
    fn test_delete_range_with_yes() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "1-2", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[y/N]").not())
            .stdout(assertions::has_success("Deleted 2 product(s). 1 remaining."));

        assert_eq!(names(&store.products()), vec!["Coffee Maker"]);
        Ok(())
    }

    #[test]
    fn test_delete_by_id() -> anyhow::Result<()> {
        let store = create_seeded_store()?;
        let coffee = store.products()[2].id.clone();

        store
            .command()?
            .args(["delete", &coffee, "-y"])
            .assert()
            .success();

        assert!(store.products().iter().all(|p| p.id != coffee));
        Ok(())
    }

    #[test]
    fn test_delete_everything_leaves_empty_array() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "1,2,3", "--yes"])
            .assert()
            .success();

        let blob = std::fs::read_to_string(store.storage().slot_path("products"))?;
        assert_eq!(blob, "[]");
        Ok(())
    }

    #[test]
    fn test_delete_no_targets() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .arg("delete")
            .assert()
            .failure()
            .stdout(assertions::has_error("No products selected"));

        Ok(())
    }

    #[test]
    fn test_delete_on_empty_inventory() -> anyhow::Result<()> {
        let store = setup_test_store()?;

        store
            .command()?
            .args(["delete", "1", "--yes"])
            .assert()
            .failure()
            .stdout(assertions::has_error("No products in the inventory."));

        Ok(())
    }

    #[test]
    fn test_delete_invalid_range() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "3-1", "--yes"])
            .assert()
            .failure()
            .stdout(assertions::has_error(
                "Invalid range: start (3) must be <= end (1)",
            ));

        assert_eq!(store.products().len(), 3);
        Ok(())
    }

    #[test]
    fn test_delete_range_past_the_end() -> anyhow::Result<()> {
        let store = create_seeded_store()?;

        store
            .command()?
            .args(["delete", "1-18446744073709551615", "--yes"])
            .assert()
            .failure()
            .stdout(assertions::has_error(
                "Position 18446744073709551615 is out of range (1-3 available)",
            ));

        assert_eq!(store.products().len(), 3);
        Ok(())
    }
}
