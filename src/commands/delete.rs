use crate::core::{
    command_init::InventoryContext, error::Result, output::confirm, print_info, print_success,
    storage::Storage,
};
use std::io::{self, BufRead};

/// Delete the selected products, asking about each one unless `assume_yes`.
///
/// Answers are read from `input`. Selection errors abort before anything is
/// deleted.
pub fn execute_delete<S: Storage + 'static, R: BufRead>(
    context: &InventoryContext<S>,
    targets: Vec<String>,
    assume_yes: bool,
    input: &mut R,
) -> Result<()> {
    let selected = context.select(&targets)?;
    let list = context.list_view();

    let mut deleted = 0;
    for product in &selected {
        let mut prompt_error = None;
        let removed = list.on_delete_product(&product.id, |product| {
            if assume_yes {
                return true;
            }
            let question = format!("Delete \"{}\"?", product.name);
            confirm(&question, input, &mut io::stdout()).unwrap_or_else(|e| {
                prompt_error = Some(e);
                false
            })
        })?;

        if let Some(e) = prompt_error {
            return Err(e.into());
        }
        if removed {
            deleted += 1;
        }
    }

    if deleted == 0 {
        print_info("Nothing deleted.");
    } else {
        print_success(&format!(
            "Deleted {deleted} product(s). {} remaining.",
            list.total()
        ));
        println!();
    }
    Ok(())
}
