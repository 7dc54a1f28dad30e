//! Inventory Manager - a small local-first product inventory.
//!
//! Products live in a [`ProductRepository`] that mirrors the whole collection
//! into a storage slot on every change and publishes each new snapshot to its
//! subscribers. A [`ViewCoordinator`] tracks whether the user is browsing,
//! creating or editing, and the list and form views in [`components`] sit on
//! top of both.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Product model and payloads
//! - Repository, storage slots and observers
//! - View-mode coordination
//! - Filtering and target selection
//! - Error handling and result types

pub mod commands;
pub mod components;
pub mod core;

pub use components::{ProductFormView, ProductListView};

// Re-export the core public API for external users
pub use core::{
    // Persistence
    FileStorage,
    // Error handling
    InventoryError,
    MemoryStorage,
    // Data model
    NewProduct,
    Product,
    // Filtering and selection
    ProductFilter,
    ProductPatch,
    ProductRepository,
    Result,
    Storage,
    // Observation
    Subject,
    Subscription,
    TargetParser,
    ViewCoordinator,
    ViewMode,
    ViewState,
    STORAGE_KEY,
    SUGGESTED_CATEGORIES,
};
