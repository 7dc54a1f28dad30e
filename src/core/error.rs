//! Domain-specific error types for the inventory manager.
//!
//! This module defines [`InventoryError`], the single error enum shared by the
//! storage layer, the repository, the presentation components and the terminal
//! front end. It uses `thiserror` for the definitions and offers a few
//! constructors for the variants that carry paths or sources.
//!
//! # Public API
//! - [`InventoryError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, InventoryError>`
//!
//! # Error Categories
//! - **Storage**: directory, read, write and serialization failures
//! - **Products**: unknown identifiers, invalid form fields
//! - **Selection**: malformed or out-of-range list positions
//! - **Configuration**: unreadable config files
//!
//! A missing product on update or delete is *not* an error at the repository
//! level (those calls return `None`/`false`); only the callers that need to
//! report it to a user turn it into [`InventoryError::ProductNotFound`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    // Storage errors
    #[error("Could not determine a data directory for the product store")]
    StorageDirectoryNotFound,

    #[error("Failed to create storage directory '{path}': {source}")]
    StorageDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read storage slot '{path}': {source}")]
    StorageReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to persist storage slot '{path}': {source}")]
    StorageWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize product collection: {source}")]
    SerializationFailed { source: serde_json::Error },

    // Product errors
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    // Selection errors
    #[error("No products selected. Usage: <command> <targets>\nExample: inventory delete 1 3-5")]
    NoTargetsProvided,

    #[error("Invalid range format: '{range}'. Use format like '3-6'")]
    InvalidRangeFormat { range: String },

    #[error("Invalid number in range: '{number}'")]
    InvalidRangeNumber { number: String },

    #[error("Invalid range: start ({start}) must be <= end ({end})")]
    InvalidRangeOrder { start: usize, end: usize },

    #[error("Position must be positive (got 0)")]
    ZeroIndex,

    #[error("Position {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("Expected a single product but {count} were selected")]
    MultipleTargets { count: usize },

    #[error("No products in the inventory. Run 'inventory add' or 'inventory seed' first.")]
    NoProductsAvailable,

    // Configuration errors
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    /// Create a product not found error
    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::ProductNotFound { id: id.into() }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidField { field, reason }
    }

    pub fn storage_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StorageDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn storage_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a persistence failure for a slot that could not be written
    pub fn storage_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn serialization_failed(source: serde_json::Error) -> Self {
        Self::SerializationFailed { source }
    }

    pub fn invalid_range_format(range: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            range: range.into(),
        }
    }

    pub fn invalid_range_number(number: impl Into<String>) -> Self {
        Self::InvalidRangeNumber {
            number: number.into(),
        }
    }

    pub fn invalid_range_order(start: usize, end: usize) -> Self {
        Self::InvalidRangeOrder { start, end }
    }

    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while writing the product collection
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::StorageWriteFailed { .. }
                | Self::StorageDirectoryCreationFailed { .. }
                | Self::SerializationFailed { .. }
        )
    }
}
