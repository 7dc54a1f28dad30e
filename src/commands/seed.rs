use crate::commands::list::print_product_list;
use crate::core::{command_init::InventoryContext, error::Result, print_success, storage::Storage};

/// Add the three sample products and show the resulting list
pub fn execute_seed<S: Storage + 'static>(context: &InventoryContext<S>) -> Result<()> {
    let list = context.list_view();
    let seeded = list.on_seed_data()?;

    print_success(&format!("Added {} sample products.", seeded.len()));
    print_product_list(&list);
    Ok(())
}
