//! `napkin order` command - Order management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::{
    effective_format, format_reference, open_repository, print_structured,
};
use crate::cli::prompt::FormPrompter;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::core::entity::Named;
use crate::core::resolve::{names, resolve_id};
use crate::entities::Order;

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// List orders in the order they were placed
    List(ListArgs),

    /// Place a new order
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only orders for this customer id
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Only orders for this product id
    #[arg(long)]
    pub product_id: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Customer name (first customer with exactly this name)
    #[arg(long)]
    pub customer: Option<String>,

    /// Customer id, stored as given without lookup
    #[arg(long, conflicts_with = "customer")]
    pub customer_id: Option<String>,

    /// Product name (first product with exactly this name)
    #[arg(long)]
    pub product: Option<String>,

    /// Product id, stored as given without lookup
    #[arg(long, conflicts_with = "product")]
    pub product_id: Option<String>,

    /// Interactive mode (pick customer and product from lists)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 17),
    ColumnDef::new("customer", "CUSTOMER", 36),
    ColumnDef::new("product", "PRODUCT", 36),
    ColumnDef::new("timestamp", "PLACED", 16),
];

/// Run an order subcommand
pub fn run(cmd: OrderCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        OrderCommands::List(args) => run_list(args, global),
        OrderCommands::New(args) => run_new(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let repo = open_repository(global, &config)?;

    let orders: Vec<&Order> = repo
        .orders()
        .iter()
        .filter(|o| args.customer_id.as_ref().map_or(true, |id| o.customer_id == *id))
        .filter(|o| args.product_id.as_ref().map_or(true, |id| o.product_id == *id))
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if args.count {
        println!("{}", orders.len());
        return Ok(());
    }

    let format = effective_format(global, &config, OutputFormat::Tsv);
    if print_structured(&orders, format)? {
        return Ok(());
    }

    if orders.is_empty() && format == OutputFormat::Tsv {
        println!("No orders found.");
        return Ok(());
    }

    let rows = orders.iter().map(|o| {
        TableRow::new(o.id.clone())
            .cell("id", CellValue::Id(o.id.clone()))
            .cell(
                "customer",
                CellValue::Text(format_reference(&o.customer_id, repo.customers())),
            )
            .cell(
                "product",
                CellValue::Text(format_reference(&o.product_id, repo.products())),
            )
            .cell("timestamp", CellValue::DateTime(o.timestamp))
    });

    let table_config = if global.quiet {
        TableConfig::for_pipe()
    } else {
        TableConfig::default()
    };
    TableFormatter::new(COLUMNS, "order")
        .with_config(table_config)
        .output(rows.collect(), format)
}

/// Pick the id for one side of an order: explicit id, then name, then prompt
fn pick_id<T: Named>(
    id: Option<String>,
    name: Option<String>,
    records: &[T],
    prompt: Option<(&FormPrompter, &str)>,
) -> Result<Option<String>> {
    if id.is_some() {
        return Ok(id);
    }

    let name = match (name, prompt) {
        (Some(name), _) => name,
        (None, Some((prompter, label))) => {
            match prompter.select_name(label, &names(records))? {
                Some(name) => name,
                None => return Ok(None),
            }
        }
        (None, None) => return Ok(None),
    };

    Ok(resolve_id(records, &name).map(str::to_string))
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let mut repo = open_repository(global, &config)?;
    let prompter = FormPrompter::new();

    let customer_id = pick_id(
        args.customer_id,
        args.customer,
        repo.customers(),
        args.interactive.then_some((&prompter, "Customer")),
    )?;
    let product_id = pick_id(
        args.product_id,
        args.product,
        repo.products(),
        args.interactive.then_some((&prompter, "Product")),
    )?;

    let (Some(customer_id), Some(product_id)) = (customer_id, product_id) else {
        eprintln!(
            "{} Customer or product not found; order not created",
            style("!").yellow()
        );
        return Ok(());
    };

    let order = repo.add_order(&customer_id, &product_id)?;

    if global.quiet {
        println!("{}", order.id);
        return Ok(());
    }

    println!(
        "{} Created order {}",
        style("✓").green(),
        style(&order.id).cyan()
    );
    println!("   Customer: {}", order.customer_id);
    println!("   Product: {}", order.product_id);
    println!("   Placed: {}", order.timestamp.to_rfc3339());

    Ok(())
}
