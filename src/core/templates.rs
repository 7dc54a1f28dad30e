//! Template system for consistent output formatting.
//!
//! Every line the CLI prints about products comes from one of the
//! [`TEMPLATES`] strings. Placeholders (`{name}`, `{price}`, ...) are filled in
//! from a [`TemplateContext`] in a single pass, and each value is colored as it
//! is inserted, so literal template text keeps the terminal's default color.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output lines
//! - [`TemplateContext`]: Values available to placeholders
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Rendering with colors
//! - [`render_template_plain`]: Rendering without colors, for tests
//! - [`strip_ansi_codes`]: Utility for removing color codes
//! - [`product_context`]: Context holding every field of a product

use crate::core::colors::{
    get_colored_category, get_colored_price, get_stock_badge, stock_label,
};
use crate::core::product::Product;
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    // List
    pub header_inventory: &'static str,
    pub header_filter: &'static str,
    pub product_line: &'static str,
    pub empty_inventory: &'static str,
    pub empty_filtered: &'static str,

    // Details
    pub detail_name: &'static str,
    pub detail_description: &'static str,
    pub detail_price: &'static str,
    pub detail_category: &'static str,
    pub detail_stock: &'static str,
    pub detail_id: &'static str,
    pub detail_created: &'static str,
    pub detail_updated: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    header_inventory: "Inventory: {summary}",
    header_filter: "Filter: {filter}",
    product_line: "   [{n}] {stock} {name} {price} ({category})",
    empty_inventory: "No products yet. Run 'inventory add' or 'inventory seed' to get started.",
    empty_filtered: "No products match the current filter.",

    detail_name: "   Name:        {name}",
    detail_description: "   Description: {description}",
    detail_price: "   Price:       {price}",
    detail_category: "   Category:    {category}",
    detail_stock: "   Stock:       {stock_label}",
    detail_id: "   Id:          {id}",
    detail_created: "   Created:     {created_at}",
    detail_updated: "   Updated:     {updated_at}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub n: Option<usize>,
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<f64>,
    pub category: Option<&'a str>,
    pub in_stock: Option<bool>,
    pub created_at: Option<&'a str>,
    pub updated_at: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub filter: Option<&'a str>,
}

/// Timestamp as shown in details, e.g. `2025-01-02 03:04:05 UTC`
pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Fill a context with the fields of `product`. Timestamps must be
/// pre-formatted by the caller since the context only borrows.
pub fn product_context<'a>(
    product: &'a Product,
    created_at: &'a str,
    updated_at: &'a str,
) -> TemplateContext<'a> {
    TemplateContext {
        id: Some(&product.id),
        name: Some(&product.name),
        description: Some(&product.description),
        price: Some(product.price),
        category: Some(&product.category),
        in_stock: Some(product.in_stock),
        created_at: Some(created_at),
        updated_at: Some(updated_at),
        ..Default::default()
    }
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.name.map_or(0, str::len)
        + context.description.map_or(0, str::len)
        + context.category.map_or(0, str::len)
        + context.summary.map_or(0, str::len)
        + context.filter.map_or(0, str::len)
        + 128; // color codes, numbers, timestamps

    let mut output = String::with_capacity(estimated_capacity);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            // No closing brace, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
        } else if !push_placeholder(&placeholder, context, &mut output) {
            // Unknown placeholder or missing value, keep as-is
            let _ = write!(output, "{{{placeholder}}}");
        }
    }

    output
}

/// Push the colored value of `placeholder`. False when it has no value.
fn push_placeholder(placeholder: &str, context: &TemplateContext, output: &mut String) -> bool {
    let rendered = match placeholder {
        "n" => context.n.map(|n| n.to_string().white().to_string()),
        "id" => context.id.map(|id| id.bright_black().to_string()),
        "name" => context.name.map(|name| name.white().bold().to_string()),
        "description" => context.description.map(|d| d.white().to_string()),
        "price" => context
            .price
            .map(|price| get_colored_price(price).to_string()),
        "category" => context
            .category
            .map(|category| get_colored_category(category).to_string()),
        "stock" => context
            .in_stock
            .map(|in_stock| get_stock_badge(in_stock).to_string()),
        "stock_label" => context.in_stock.map(|in_stock| {
            let label = stock_label(in_stock);
            if in_stock {
                label.green().to_string()
            } else {
                label.red().to_string()
            }
        }),
        "created_at" => context.created_at.map(|t| t.bright_black().to_string()),
        "updated_at" => context.updated_at.map(|t| t.bright_black().to_string()),
        "summary" => context.summary.map(|s| s.blue().to_string()),
        "filter" => context.filter.map(|f| f.bright_black().to_string()),
        _ => None,
    };

    match rendered {
        Some(value) => {
            output.push_str(&value);
            true
        }
        None => false,
    }
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break; // end of escape sequence
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
