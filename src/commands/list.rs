use crate::components::ProductListView;
use crate::core::{
    command_init::InventoryContext,
    error::Result,
    filter::ProductFilter,
    storage::Storage,
    templates::{product_context, render_template, TemplateContext, TEMPLATES},
};

pub fn execute_list<S: Storage + 'static>(
    context: &InventoryContext<S>,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let list = context.list_view();
    if let Some(term) = search {
        list.set_search_term(term);
    }
    list.set_category(category);

    print_product_list(&list);
    Ok(())
}

/// Print the numbered list with its summary line
pub fn print_product_list<S: Storage>(list: &ProductListView<S>) {
    for line in render_product_list(list) {
        println!("{line}");
    }
}

/// Lines of the list output, colored
pub fn render_product_list<S: Storage>(list: &ProductListView<S>) -> Vec<String> {
    let mut lines = vec![String::new()];

    let summary = list.results_summary();
    let header_context = TemplateContext {
        summary: Some(&summary),
        ..Default::default()
    };
    lines.push(render_template(TEMPLATES.header_inventory, &header_context));

    let filter = list.filter();
    if filter.is_active() {
        let description = describe_filter(&filter);
        let filter_context = TemplateContext {
            filter: Some(&description),
            ..Default::default()
        };
        lines.push(render_template(TEMPLATES.header_filter, &filter_context));
    }
    lines.push(String::new());

    if list.total() == 0 {
        lines.push(render_template(
            TEMPLATES.empty_inventory,
            &TemplateContext::default(),
        ));
    } else if list.shown() == 0 {
        lines.push(render_template(
            TEMPLATES.empty_filtered,
            &TemplateContext::default(),
        ));
    } else {
        for (position, product) in list.numbered() {
            let line_context = TemplateContext {
                n: Some(position),
                ..product_context(&product, "", "")
            };
            lines.push(render_template(TEMPLATES.product_line, &line_context));
        }
    }

    lines.push(String::new());
    lines
}

fn describe_filter(filter: &ProductFilter) -> String {
    let mut parts = Vec::new();
    if !filter.search_term.is_empty() {
        parts.push(format!("search \"{}\"", filter.search_term));
    }
    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("category {category}"));
    }
    parts.join(", ")
}
