//! `napkin product` command - Product management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::{
    effective_format, format_reference, open_repository, print_structured,
};
use crate::cli::helpers::is_native_id;
use crate::cli::prompt::FormPrompter;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::core::identity::EntityPrefix;
use crate::entities::Product;

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products in the order they were added
    List(ListArgs),

    /// Create a new product for a vendor
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in product name (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Only products whose vendor_id equals this id
    #[arg(long)]
    pub vendor_id: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Product name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Vendor name (first vendor with exactly this name)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Vendor id, stored as given without lookup
    #[arg(long, conflicts_with = "vendor")]
    pub vendor_id: Option<String>,

    /// Interactive mode (prompt for name, pick vendor from a list)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 17),
    ColumnDef::new("name", "NAME", 30),
    ColumnDef::new("vendor", "VENDOR", 40),
];

/// Run a product subcommand
pub fn run(cmd: ProductCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProductCommands::List(args) => run_list(args, global),
        ProductCommands::New(args) => run_new(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let repo = open_repository(global, &config)?;

    let products: Vec<&Product> = repo
        .products()
        .iter()
        .filter(|p| {
            args.search
                .as_ref()
                .map_or(true, |search| p.name.to_lowercase().contains(&search.to_lowercase()))
        })
        .filter(|p| args.vendor_id.as_ref().map_or(true, |id| p.vendor_id == *id))
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if args.count {
        println!("{}", products.len());
        return Ok(());
    }

    let format = effective_format(global, &config, OutputFormat::Tsv);
    if print_structured(&products, format)? {
        return Ok(());
    }

    if products.is_empty() && format == OutputFormat::Tsv {
        println!("No products found.");
        return Ok(());
    }

    let rows = products.iter().map(|p| {
        TableRow::new(p.id.clone())
            .cell("id", CellValue::Id(p.id.clone()))
            .cell("name", CellValue::Text(p.name.clone()))
            .cell(
                "vendor",
                CellValue::Text(format_reference(&p.vendor_id, repo.vendors())),
            )
    });

    let table_config = if global.quiet {
        TableConfig::for_pipe()
    } else {
        TableConfig::default()
    };
    TableFormatter::new(COLUMNS, "product")
        .with_config(table_config)
        .output(rows.collect(), format)
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let mut repo = open_repository(global, &config)?;
    let prompter = FormPrompter::new();

    let name = if args.interactive {
        prompter.text_or(args.name, "Name")?
    } else {
        args.name.unwrap_or_default()
    };

    let product = if let Some(vendor_id) = args.vendor_id {
        if !global.quiet && !is_native_id(&vendor_id, EntityPrefix::Vend) {
            eprintln!(
                "{} '{}' is not a vendor id from this store; storing it as given",
                style("!").yellow(),
                vendor_id
            );
        }
        repo.add_product(&name, &vendor_id)?
    } else {
        let vendor_name = match args.vendor {
            Some(vendor) => Some(vendor),
            None if args.interactive => prompter.select_name("Vendor", &repo.vendor_names())?,
            None => None,
        };
        let Some(vendor_name) = vendor_name else {
            eprintln!(
                "{} No vendor selected; product not created",
                style("!").yellow()
            );
            return Ok(());
        };

        match repo.add_product_for_vendor(&name, &vendor_name)? {
            Some(product) => product,
            None => {
                eprintln!(
                    "{} No vendor named '{}'; product not created",
                    style("!").yellow(),
                    vendor_name
                );
                return Ok(());
            }
        }
    };

    if global.quiet {
        println!("{}", product.id);
        return Ok(());
    }

    println!(
        "{} Created product {}",
        style("✓").green(),
        style(&product.id).cyan()
    );
    println!("   Name: {}", style(&product.name).yellow());
    println!("   Vendor: {}", product.vendor_id);

    Ok(())
}
