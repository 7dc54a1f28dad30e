//! The persisted product repository.
//!
//! [`ProductRepository`] is the only owner of the product collection and of the
//! storage slot it is mirrored to. Every mutation rewrites the whole collection
//! into the slot and then publishes the new snapshot to all subscribers.
//!
//! # Public API
//! - [`ProductRepository::load`]: read the slot (fail-soft) and build the repository
//! - [`ProductRepository::subscribe`] / [`ProductRepository::list_all`]: snapshots
//! - [`ProductRepository::get_by_id`]: synchronous lookup
//! - [`ProductRepository::create`], [`ProductRepository::update`],
//!   [`ProductRepository::delete`]: mutations
//! - [`ProductRepository::seed_sample_data`]: three fixed sample products
//!
//! # Consistency
//! A mutation first serializes and writes the new collection. Only when the
//! write succeeds is the in-memory collection replaced and the snapshot
//! published, so observers never see a collection that is not persisted.
//! Writes made by another process to the same slot are not noticed until the
//! next [`ProductRepository::load`].

use crate::core::error::{InventoryError, Result};
use crate::core::ids::generate_id;
use crate::core::observable::{Subject, Subscription};
use crate::core::product::{check_price, timestamp_now, NewProduct, Product, ProductPatch};
use crate::core::storage::Storage;

/// Slot the product collection is stored under
pub const STORAGE_KEY: &str = "products";

pub struct ProductRepository<S: Storage> {
    storage: S,
    key: String,
    products: Subject<Vec<Product>>,
}

impl<S: Storage> ProductRepository<S> {
    /// Load the collection from the default `products` slot
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    /// Load the collection from slot `key`.
    ///
    /// An absent slot yields an empty collection and nothing is written back.
    /// A slot that cannot be read or parsed is logged and also yields an empty
    /// collection; the stored value is left as it is until the next mutation.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let products = read_collection(&storage, &key);
        log::debug!("Loaded {} products from slot '{key}'", products.len());

        Self {
            storage,
            key,
            products: Subject::new(products),
        }
    }

    /// Subscribe to collection snapshots.
    ///
    /// `listener` receives the current snapshot immediately, then every
    /// snapshot published after a successful mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<Vec<Product>>
    where
        F: FnMut(&Vec<Product>) + 'static,
    {
        self.products.subscribe(listener)
    }

    /// Current snapshot of the collection
    pub fn list_all(&self) -> Vec<Product> {
        self.products.value()
    }

    pub fn len(&self) -> usize {
        self.products.with_value(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.products
            .with_value(|products| products.iter().find(|p| p.id == id).cloned())
    }

    /// Append a new product with a fresh id and timestamps.
    /// Negative and non-finite prices are rejected before anything is written.
    pub fn create(&self, fields: NewProduct) -> Result<Product> {
        check_price(fields.price)?;
        let product = Product::create(generate_id(), fields, timestamp_now());

        let mut products = self.list_all();
        products.push(product.clone());
        self.save(products)?;

        log::debug!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Merge `patch` into the product `id`.
    ///
    /// Returns `Ok(None)` without touching storage or subscribers when no
    /// product has that id. A merged price that is negative or not finite is
    /// rejected the same way, as [`InventoryError::InvalidField`].
    pub fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        let mut products = self.list_all();
        let Some(index) = products.iter().position(|p| p.id == id) else {
            log::debug!("Update skipped, no product with id {id}");
            return Ok(None);
        };

        let mut product = products[index].clone();
        product.apply(patch, timestamp_now());
        check_price(product.price)?;
        products[index] = product.clone();
        self.save(products)?;

        log::debug!("Updated product {id}");
        Ok(Some(product))
    }

    /// Remove the product `id`. Returns `Ok(false)` when there is none.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let products = self.list_all();
        let before = products.len();
        let remaining: Vec<Product> = products.into_iter().filter(|p| p.id != id).collect();

        if remaining.len() == before {
            log::debug!("Delete skipped, no product with id {id}");
            return Ok(false);
        }

        self.save(remaining)?;
        log::debug!("Deleted product {id}");
        Ok(true)
    }

    /// Create the three sample products offered on an empty inventory
    pub fn seed_sample_data(&self) -> Result<Vec<Product>> {
        sample_products()
            .into_iter()
            .map(|fields| self.create(fields))
            .collect()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn save(&self, products: Vec<Product>) -> Result<()> {
        let json = serde_json::to_string(&products).map_err(|e| {
            log::error!("Failed to serialize product collection: {e}");
            InventoryError::serialization_failed(e)
        })?;

        self.storage.set_item(&self.key, &json)?;
        self.products.next(products);
        Ok(())
    }
}

fn read_collection<S: Storage>(storage: &S, key: &str) -> Vec<Product> {
    let stored = match storage.get_item(key) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::error!("Error loading products from storage: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&stored) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Error loading products from storage: {e}");
            Vec::new()
        }
    }
}

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Laptop Pro".to_string(),
            description: "High-performance laptop for professionals".to_string(),
            price: 1299.99,
            category: "Electronics".to_string(),
            in_stock: true,
        },
        NewProduct {
            name: "Wireless Headphones".to_string(),
            description: "Premium noise-cancelling headphones".to_string(),
            price: 249.99,
            category: "Electronics".to_string(),
            in_stock: true,
        },
        NewProduct {
            name: "Coffee Maker".to_string(),
            description: "Automatic drip coffee maker".to_string(),
            price: 89.99,
            category: "Appliances".to_string(),
            in_stock: false,
        },
    ]
}
