use clap::{Args, Parser, Subcommand};
use inventory_manager::commands::*;
use inventory_manager::core::{
    command_init::CommandInit,
    error::Result,
    print_error,
    product::{NewProduct, ProductPatch},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "A small local product inventory manager")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory holding the product store (overrides config.json)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the numbered product list
    List {
        /// Case-insensitive text to look for in names and descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// Only show this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show product details by position or id
    Show {
        /// Positions (e.g. "1 3-5,8") or product ids
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// Add a product
    Add(AddArgs),
    /// Edit one product by position or id
    Edit(EditArgs),
    /// Delete products by position or id
    Delete {
        /// Positions (e.g. "1 3-5,8") or product ids
        targets: Vec<String>,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Add three sample products
    Seed,
    /// List the suggested categories
    Categories,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    price: f64,
    #[arg(long)]
    category: String,
    /// Record the product as out of stock
    #[arg(long)]
    out_of_stock: bool,
}

#[derive(Args)]
struct EditArgs {
    /// Position or product id
    target: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long, conflicts_with = "out_of_stock")]
    in_stock: bool,
    #[arg(long)]
    out_of_stock: bool,
}

impl From<AddArgs> for NewProduct {
    fn from(args: AddArgs) -> Self {
        NewProduct {
            name: args.name,
            description: args.description,
            price: args.price,
            category: args.category,
            in_stock: !args.out_of_stock,
        }
    }
}

impl EditArgs {
    fn overrides(&self) -> ProductPatch {
        ProductPatch {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            in_stock: match (self.in_stock, self.out_of_stock) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let context = CommandInit::initialize(cli.data_dir)?;

    match cli.command {
        Commands::List { search, category } => execute_list(&context, search, category),
        Commands::Show { targets } => execute_show(&context, targets),
        Commands::Add(args) => execute_add(&context, args.into()),
        Commands::Edit(args) => {
            let overrides = args.overrides();
            execute_edit(&context, &args.target, overrides)
        }
        Commands::Delete { targets, yes } => {
            execute_delete(&context, targets, yes, &mut std::io::stdin().lock())
        }
        Commands::Seed => execute_seed(&context),
        Commands::Categories => execute_categories(&context),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli) {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
