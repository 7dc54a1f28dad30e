//! Predefined inventories for tests

#![allow(dead_code)]

use super::store::*;
use inventory_manager::core::{
    error::Result,
    product::{NewProduct, Product},
    storage::Storage,
};

/// A collection as written by the browser version: camelCase keys and
/// millisecond timestamps with a `Z` suffix
pub const BROWSER_BLOB: &str = r#"[
  {
    "id": "lq2x9k1abc",
    "name": "Desk Lamp",
    "description": "LED, dimmable",
    "price": 39.5,
    "category": "Home & Garden",
    "inStock": true,
    "createdAt": "2024-03-01T10:00:00.000Z",
    "updatedAt": "2024-03-02T11:30:00.250Z"
  },
  {
    "id": "lq2xa0zdef",
    "name": "Paperback Novel",
    "description": "Used, good condition",
    "price": 7,
    "category": "Books",
    "inStock": false,
    "createdAt": "2024-03-05T08:15:00.000Z",
    "updatedAt": "2024-03-05T08:15:00.000Z"
  }
]"#;

/// Scenario: store holding the three sample products
pub fn create_seeded_store() -> Result<TestStore> {
    let store = setup_test_store()?;
    store.repository().seed_sample_data()?;
    Ok(store)
}

/// Scenario: store holding a collection written by another client
pub fn create_browser_store() -> Result<TestStore> {
    let store = setup_test_store()?;
    store.storage().set_item("products", BROWSER_BLOB)?;
    Ok(store)
}

/// Scenario: store whose slot holds something that is not a product array
pub fn create_corrupt_store(content: &str) -> Result<TestStore> {
    let store = setup_test_store()?;
    store.storage().set_item("products", content)?;
    Ok(store)
}

pub fn new_product(name: &str, category: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        category: category.to_string(),
        in_stock: true,
    }
}

pub fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}
