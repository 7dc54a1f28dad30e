//! Shared test utilities for inventory-manager
//!
//! Integration tests run the `inventory` binary against a throwaway data
//! directory, or drive the library directly against the same files.

pub mod assertions;
pub mod fixtures;
pub mod store;
