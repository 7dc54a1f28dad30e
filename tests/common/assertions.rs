//! Common assertion helpers for command output

#![allow(dead_code)]

use predicates::prelude::*;

/// Summary line printed above every list
pub fn has_summary(shown: usize, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Inventory: {shown} of {total} products"))
}

/// Numbered list entry for `name` at `position`
pub fn has_product_line(position: usize, name: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"\[{position}\] (In Stock|Out of Stock) +{}", regex_escape(name)))
        .expect("valid product line pattern")
}

pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✕ Error: {message}"))
}

pub fn has_success(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✓ {message}"))
}

pub fn empty_inventory() -> impl Predicate<str> {
    predicates::str::contains("No products yet")
}

fn regex_escape(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            let escape = "\\.+*?()|[]{}^$#&-~".contains(c);
            escape.then_some('\\').into_iter().chain(std::iter::once(c))
        })
        .collect()
}
