//! Product records and the payloads used to create and change them.
//!
//! # Public API
//! - [`Product`]: A persisted inventory record
//! - [`NewProduct`]: Fields supplied when creating a record (no id, no timestamps)
//! - [`ProductPatch`]: Partial set of fields overwritten by an update
//! - [`SUGGESTED_CATEGORIES`]: Category names offered by the form and filter
//!
//! # Serialized Form
//! Records are stored with camelCase keys (`inStock`, `createdAt`, `updatedAt`)
//! and RFC 3339 timestamps, so a collection written by the browser version of
//! the inventory manager loads unchanged.

use crate::core::error::{InventoryError, Result};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Category names offered by the form and the list filter. Not enforced.
pub const SUGGESTED_CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports & Outdoors",
    "Appliances",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a freshly created record. Both timestamps are set to `now`.
    pub fn create(id: String, fields: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `patch` into this record and refresh `updated_at`.
    ///
    /// `id` and `created_at` are never touched. The new `updated_at` is strictly
    /// later than the previous one, even when the clock has not moved.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }

        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }

    /// The descriptive fields of this record, as the form edits them
    pub fn to_fields(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            in_stock: self.in_stock,
        }
    }
}

/// Current time at millisecond resolution, the precision records are stored with.
/// Prices must be finite and non-negative. JSON has no NaN or infinity, so a
/// collection holding one would not load back.
pub fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::invalid_field(
            "price",
            "must be a non-negative number",
        ));
    }
    Ok(())
}

pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Default for NewProduct {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            in_stock: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.in_stock.is_none()
    }
}

impl From<NewProduct> for ProductPatch {
    fn from(fields: NewProduct) -> Self {
        Self {
            name: Some(fields.name),
            description: Some(fields.description),
            price: Some(fields.price),
            category: Some(fields.category),
            in_stock: Some(fields.in_stock),
        }
    }
}
