use crate::core::{
    colors::get_colored_category,
    command_init::InventoryContext,
    error::Result,
    print_section_header,
    product::{Product, SUGGESTED_CATEGORIES},
    storage::Storage,
};
use colored::*;

/// Print the suggested categories with product counts, then any other
/// categories present in the collection
pub fn execute_categories<S: Storage + 'static>(context: &InventoryContext<S>) -> Result<()> {
    let products = context.repository.list_all();

    print_section_header("Suggested categories");
    for category in SUGGESTED_CATEGORIES {
        print_category_line(category, count_in(&products, category));
    }

    let others = other_categories(&products);
    if !others.is_empty() {
        print_section_header("Other categories in use");
        for category in &others {
            print_category_line(category, count_in(&products, category));
        }
    }

    println!();
    Ok(())
}

fn print_category_line(category: &str, count: usize) {
    println!(
        "   {} {}",
        get_colored_category(category),
        format!("({count})").bright_black()
    );
}

fn count_in(products: &[Product], category: &str) -> usize {
    products.iter().filter(|p| p.category == category).count()
}

/// Categories used by products but not suggested, in first-seen order
fn other_categories(products: &[Product]) -> Vec<String> {
    let mut others: Vec<String> = Vec::new();
    for product in products {
        let category = &product.category;
        if !SUGGESTED_CATEGORIES.contains(&category.as_str()) && !others.contains(category) {
            others.push(category.clone());
        }
    }
    others
}
