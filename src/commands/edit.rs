use crate::commands::show::print_product_details;
use crate::core::{
    command_init::InventoryContext,
    error::Result,
    print_info, print_success,
    product::{NewProduct, ProductPatch},
    storage::Storage,
};

/// Load the product into the form, overwrite the given fields and submit
pub fn execute_edit<S: Storage + 'static>(
    context: &InventoryContext<S>,
    target: &str,
    overrides: ProductPatch,
) -> Result<()> {
    let product = context.select_one(target)?;

    if overrides.is_empty() {
        print_info(&format!("Nothing to change for \"{}\"", product.name));
        return Ok(());
    }

    let list = context.list_view();
    let form = context.form_view();

    list.on_edit_product(&product.id);
    form.edit(|data| apply_overrides(data, overrides));
    let updated = form.submit()?;

    print_success(&format!("Updated \"{}\"", updated.name));
    print_product_details(&updated);
    println!();
    Ok(())
}

fn apply_overrides(data: &mut NewProduct, overrides: ProductPatch) {
    if let Some(name) = overrides.name {
        data.name = name;
    }
    if let Some(description) = overrides.description {
        data.description = description;
    }
    if let Some(price) = overrides.price {
        data.price = price;
    }
    if let Some(category) = overrides.category {
        data.category = category;
    }
    if let Some(in_stock) = overrides.in_stock {
        data.in_stock = in_stock;
    }
}
