//! Color mapping for product listings.
//!
//! # Public API
//! - [`get_category_color_style`]: Color function for a category name
//! - [`get_stock_badge`]: Padded, colored stock badge
//! - [`get_colored_price`]: Price with two decimals
//!
//! # Color Scheme
//! - **Electronics**: Blue
//! - **Clothing**: Magenta
//! - **Books**: Yellow
//! - **Home & Garden**: Green
//! - **Sports & Outdoors**: Cyan
//! - **Appliances**: Bright white
//! - **Anything else**: Plain white
//! - **Stock**: Green when in stock, red bold when out

use colored::*;

const IN_STOCK: &str = "In Stock";
const OUT_OF_STOCK: &str = "Out of Stock";

/// Returns a closure that colors text the way `category` is shown
pub fn get_category_color_style(category: &str) -> Box<dyn Fn(&str) -> ColoredString> {
    match category {
        "Electronics" => Box::new(|text: &str| text.blue()),
        "Clothing" => Box::new(|text: &str| text.magenta()),
        "Books" => Box::new(|text: &str| text.yellow()),
        "Home & Garden" => Box::new(|text: &str| text.green()),
        "Sports & Outdoors" => Box::new(|text: &str| text.cyan()),
        "Appliances" => Box::new(|text: &str| text.bright_white()),
        _ => Box::new(|text: &str| text.white()),
    }
}

pub fn get_colored_category(category: &str) -> ColoredString {
    let color_fn = get_category_color_style(category);
    color_fn(category)
}

/// Plain stock label
pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock {
        IN_STOCK
    } else {
        OUT_OF_STOCK
    }
}

/// Stock badge padded to the width of the longest label, for alignment
pub fn get_stock_badge(in_stock: bool) -> ColoredString {
    let padded = format!("{:<width$}", stock_label(in_stock), width = OUT_OF_STOCK.len());
    if in_stock {
        padded.green()
    } else {
        padded.red().bold()
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

pub fn get_colored_price(price: f64) -> ColoredString {
    format_price(price).bright_white()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::strip_ansi_codes;

    #[test]
    fn test_stock_badges_align() {
        let in_stock = strip_ansi_codes(&get_stock_badge(true).to_string());
        let out_of_stock = strip_ansi_codes(&get_stock_badge(false).to_string());
        assert_eq!(in_stock, "In Stock    ");
        assert_eq!(in_stock.len(), out_of_stock.len());
    }

    #[test]
    fn test_price_has_two_decimals() {
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(1299.99), "$1299.99");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(
            strip_ansi_codes(&get_colored_price(24.5).to_string()),
            "$24.50"
        );
    }

    #[test]
    fn test_unknown_category_keeps_text() {
        let colored = get_colored_category("Garden Gnomes");
        assert!(colored.to_string().contains("Garden Gnomes"));
    }

    #[test]
    fn test_category_style_consistency() {
        for category in crate::core::product::SUGGESTED_CATEGORIES {
            let color_fn = get_category_color_style(category);
            assert_eq!(color_fn("x").to_string(), color_fn("x").to_string());
        }
    }
}
