//! Centralized initialization shared by every command.
//!
//! [`CommandInit`] reads the configuration, opens the slot store and loads the
//! repository. The resulting [`InventoryContext`] owns the repository and the
//! view coordinator and hands out list and form views wired to both.
//!
//! # Initialization Steps
//! 1. **Configuration**: `config.json` from the config directory, or defaults
//! 2. **Data directory**: `--data-dir`, then the configured one, then the default
//! 3. **Repository**: loaded from the configured storage key (fail-soft)

use crate::components::{ProductFormView, ProductListView};
use crate::core::{
    config::InventoryConfig,
    error::{InventoryError, Result},
    product::Product,
    repository::ProductRepository,
    selection::TargetParser,
    storage::{FileStorage, Storage},
    view_state::ViewCoordinator,
};
use std::path::PathBuf;
use std::rc::Rc;

/// Everything a command needs, shared through `Rc`
pub struct InventoryContext<S: Storage + 'static> {
    pub repository: Rc<ProductRepository<S>>,
    pub coordinator: Rc<ViewCoordinator>,
}

impl<S: Storage + 'static> InventoryContext<S> {
    pub fn new(repository: ProductRepository<S>) -> Self {
        Self {
            repository: Rc::new(repository),
            coordinator: Rc::new(ViewCoordinator::new()),
        }
    }

    pub fn list_view(&self) -> ProductListView<S> {
        ProductListView::new(Rc::clone(&self.repository), Rc::clone(&self.coordinator))
    }

    pub fn form_view(&self) -> ProductFormView<S> {
        ProductFormView::new(Rc::clone(&self.repository), Rc::clone(&self.coordinator))
    }

    /// Resolve target tokens against the current collection
    pub fn select(&self, targets: &[String]) -> Result<Vec<Product>> {
        if targets.is_empty() {
            return Err(InventoryError::NoTargetsProvided);
        }
        TargetParser::select(targets, &self.repository.list_all())
    }

    /// Resolve a token that must name exactly one product
    pub fn select_one(&self, target: &str) -> Result<Product> {
        let mut selected = self.select(&[target.to_string()])?;
        match selected.len() {
            1 => Ok(selected.remove(0)),
            count => Err(InventoryError::MultipleTargets { count }),
        }
    }
}

pub struct CommandInit;

impl CommandInit {
    /// Build the file-backed context
    pub fn initialize(data_dir: Option<PathBuf>) -> Result<InventoryContext<FileStorage>> {
        let config = InventoryConfig::load()?;
        let dir = config.resolve_data_dir(data_dir)?;
        log::debug!(
            "Using data directory {} and storage key '{}'",
            dir.display(),
            config.storage_key
        );

        let repository = ProductRepository::load_with_key(FileStorage::new(dir), config.storage_key);
        Ok(InventoryContext::new(repository))
    }
}
