use crate::core::{
    command_init::InventoryContext,
    error::Result,
    product::Product,
    storage::Storage,
    templates::{format_timestamp, product_context, render_template, TEMPLATES},
};

pub fn execute_show<S: Storage + 'static>(context: &InventoryContext<S>, targets: Vec<String>) -> Result<()> {
    let selected = context.select(&targets)?;
    for product in &selected {
        print_product_details(product);
    }
    println!();
    Ok(())
}

pub fn print_product_details(product: &Product) {
    println!();
    for line in render_product_details(product) {
        println!("{line}");
    }
}

/// Detail lines for one product. The "Updated" line is left out until the
/// product has been edited.
pub fn render_product_details(product: &Product) -> Vec<String> {
    let created_at = format_timestamp(&product.created_at);
    let updated_at = format_timestamp(&product.updated_at);
    let context = product_context(product, &created_at, &updated_at);

    let mut templates = vec![
        TEMPLATES.detail_name,
        TEMPLATES.detail_description,
        TEMPLATES.detail_price,
        TEMPLATES.detail_category,
        TEMPLATES.detail_stock,
        TEMPLATES.detail_id,
        TEMPLATES.detail_created,
    ];
    if product.updated_at != product.created_at {
        templates.push(TEMPLATES.detail_updated);
    }

    templates
        .iter()
        .map(|template| render_template(template, &context))
        .collect()
}
