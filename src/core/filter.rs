//! Client-side search and category filtering of the product collection.

use crate::core::product::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive text matched against name and description
    pub search_term: String,
    /// Exact category; `None` or empty matches every category
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn new(search_term: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product)
    }

    /// Products that match, in collection order
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.category_filter().is_some()
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.category = None;
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category_filter()
            .map_or(true, |category| product.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::{timestamp_now, NewProduct};

    fn product(name: &str, description: &str, category: &str) -> Product {
        Product::create(
            name.to_lowercase(),
            NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price: 1.0,
                category: category.to_string(),
                in_stock: true,
            },
            timestamp_now(),
        )
    }

    fn inventory() -> Vec<Product> {
        vec![
            product("Laptop Pro", "High-performance laptop", "Electronics"),
            product("Wireless Headphones", "Premium noise-cancelling", "Electronics"),
            product("Coffee Maker", "Automatic drip coffee maker", "Appliances"),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&inventory()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let products = inventory();

        let by_name = ProductFilter::new("LAPTOP", None);
        assert_eq!(names(&by_name.apply(&products)), vec!["Laptop Pro"]);

        let by_description = ProductFilter::new("noise", None);
        assert_eq!(
            names(&by_description.apply(&products)),
            vec!["Wireless Headphones"]
        );
    }

    #[test]
    fn test_category_is_exact() {
        let products = inventory();
        let filter = ProductFilter::new("", Some("Electronics".to_string()));
        assert_eq!(
            names(&filter.apply(&products)),
            vec!["Laptop Pro", "Wireless Headphones"]
        );

        let lowercase = ProductFilter::new("", Some("electronics".to_string()));
        assert!(lowercase.apply(&products).is_empty());
    }

    #[test]
    fn test_empty_category_means_all() {
        let filter = ProductFilter::new("", Some(String::new()));
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&inventory()).len(), 3);
    }

    #[test]
    fn test_search_and_category_combine() {
        let filter = ProductFilter::new("coffee", Some("Electronics".to_string()));
        assert!(filter.apply(&inventory()).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut filter = ProductFilter::new("x", Some("Books".to_string()));
        assert!(filter.is_active());
        filter.clear();
        assert_eq!(filter, ProductFilter::default());
    }
}
