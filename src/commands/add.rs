use crate::commands::show::print_product_details;
use crate::core::{
    command_init::InventoryContext, error::Result, print_success, product::NewProduct,
    storage::Storage,
};

pub fn execute_add<S: Storage + 'static>(context: &InventoryContext<S>, fields: NewProduct) -> Result<()> {
    let list = context.list_view();
    let form = context.form_view();

    list.on_add_product();
    form.edit(|data| *data = fields);
    let product = form.submit()?;

    print_success(&format!("Added \"{}\" ({})", product.name, list.results_summary()));
    print_product_details(&product);
    println!();
    Ok(())
}
