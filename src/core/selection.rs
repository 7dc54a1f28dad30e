//! Parsing of product targets given on the command line.
//!
//! A target names products either by their 1-based position in the listed
//! collection or by id. Positions accept the same forms as a numbered list
//! usually does:
//!
//! - **Single positions**: `1`, `3`
//! - **Space- or comma-separated**: `1 3 5`, `1,3,5`
//! - **Ranges**: `3-6` (selects 3,4,5,6)
//! - **Mixed**: `1 3-5,8`
//!
//! Any token made of something other than digits and `-` is taken as a
//! product id. Positions always refer to the unfiltered collection order.

use crate::core::error::{InventoryError, Result};
use crate::core::product::Product;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Position(usize),
    /// Inclusive range of positions, expanded only once checked against the collection
    Range(usize, usize),
    Id(String),
}

pub struct TargetParser;

impl TargetParser {
    /// Parse raw arguments into targets, keeping their order
    pub fn parse(args: &[String]) -> Result<Vec<Target>> {
        let mut targets = Vec::new();

        for part in args
            .iter()
            .flat_map(|arg| arg.split([' ', ',']))
            .map(str::trim)
            .filter(|part| !part.is_empty())
        {
            if !part.chars().all(|c| c.is_ascii_digit() || c == '-') {
                targets.push(Target::Id(part.to_string()));
                continue;
            }

            if part.contains('-') {
                let range_parts: Vec<&str> = part.split('-').collect();
                let [start, end] = range_parts.as_slice() else {
                    return Err(InventoryError::invalid_range_format(part));
                };

                let start: usize = start
                    .parse()
                    .map_err(|_| InventoryError::invalid_range_number(*start))?;
                let end: usize = end
                    .parse()
                    .map_err(|_| InventoryError::invalid_range_number(*end))?;

                if start > end {
                    return Err(InventoryError::invalid_range_order(start, end));
                }

                targets.push(Target::Range(start, end));
            } else {
                let position: usize = part
                    .parse()
                    .map_err(|_| InventoryError::invalid_range_number(part))?;
                targets.push(Target::Position(position));
            }
        }

        if targets.is_empty() {
            return Err(InventoryError::NoTargetsProvided);
        }

        Ok(targets)
    }

    /// Look the targets up in `products`.
    ///
    /// Duplicates are dropped, first occurrence wins. Positions and both ends
    /// of a range are checked against the collection size; an unknown id is
    /// [`InventoryError::ProductNotFound`].
    pub fn resolve(targets: &[Target], products: &[Product]) -> Result<Vec<Product>> {
        if products.is_empty() {
            return Err(InventoryError::NoProductsAvailable);
        }

        let mut seen = HashSet::new();
        let mut selected = Vec::with_capacity(targets.len());
        let mut keep = |product: &Product| {
            if seen.insert(product.id.clone()) {
                selected.push(product.clone());
            }
        };

        for target in targets {
            match target {
                Target::Position(position) => keep(Self::at_position(*position, products)?),
                Target::Range(start, end) => {
                    Self::at_position(*start, products)?;
                    Self::at_position(*end, products)?;
                    products[start - 1..*end].iter().for_each(&mut keep);
                }
                Target::Id(id) => keep(
                    products
                        .iter()
                        .find(|p| &p.id == id)
                        .ok_or_else(|| InventoryError::product_not_found(id))?,
                ),
            }
        }

        Ok(selected)
    }

    fn at_position(position: usize, products: &[Product]) -> Result<&Product> {
        if position == 0 {
            return Err(InventoryError::ZeroIndex);
        }
        products
            .get(position - 1)
            .ok_or_else(|| InventoryError::index_out_of_range(position, products.len()))
    }

    /// Parse and resolve in one step
    pub fn select(args: &[String], products: &[Product]) -> Result<Vec<Product>> {
        let targets = Self::parse(args)?;
        Self::resolve(&targets, products)
    }
}
