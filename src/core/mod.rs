//! Core functionality for the inventory manager.
//!
//! This module provides the product model, the persisted repository and its
//! storage slots, the view-mode coordinator, filtering and selection, error
//! handling, configuration and terminal formatting.

pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod filter;
pub mod ids;
pub mod observable;
pub mod output;
pub mod product;
pub mod repository;
pub mod selection;
pub mod storage;
pub mod templates;
pub mod view_state;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{InventoryError, Result};

// === Data model ===
pub use product::{NewProduct, Product, ProductPatch, SUGGESTED_CATEGORIES};

// === Persistence ===
// Slot stores and the repository that mirrors the collection into them
pub use repository::{ProductRepository, STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};

// === Observation ===
pub use observable::{Subject, Subscription};
pub use view_state::{ViewCoordinator, ViewMode, ViewState};

// === Filtering and selection ===
// Search/category filter and "1 3-5,8" style target parsing
pub use filter::ProductFilter;
pub use selection::{Target, TargetParser};

// === Command initialization ===
pub use command_init::{CommandInit, InventoryContext};

// === Configuration ===
pub use config::InventoryConfig;

// === UI templates ===
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Output formatting ===
pub use output::{confirm, print_error, print_info, print_section_header, print_success};
