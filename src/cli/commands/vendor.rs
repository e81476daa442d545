//! `napkin vendor` command - Vendor management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::{effective_format, open_repository, print_structured};
use crate::cli::prompt::FormPrompter;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::Vendor;

#[derive(Subcommand, Debug)]
pub enum VendorCommands {
    /// List vendors in the order they were added
    List(ListArgs),

    /// Create a new vendor
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in name and contact (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Vendor name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Contact details
    #[arg(long, short = 'c')]
    pub contact: Option<String>,

    /// Interactive mode (prompt for missing fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 17),
    ColumnDef::new("name", "NAME", 30),
    ColumnDef::new("contact", "CONTACT", 36),
];

/// Run a vendor subcommand
pub fn run(cmd: VendorCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        VendorCommands::List(args) => run_list(args, global),
        VendorCommands::New(args) => run_new(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let repo = open_repository(global, &config)?;

    let vendors: Vec<&Vendor> = repo
        .vendors()
        .iter()
        .filter(|v| {
            args.search.as_ref().map_or(true, |search| {
                let search = search.to_lowercase();
                v.name.to_lowercase().contains(&search) || v.contact.to_lowercase().contains(&search)
            })
        })
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if args.count {
        println!("{}", vendors.len());
        return Ok(());
    }

    let format = effective_format(global, &config, OutputFormat::Tsv);
    if print_structured(&vendors, format)? {
        return Ok(());
    }

    if vendors.is_empty() && format == OutputFormat::Tsv {
        println!("No vendors found.");
        return Ok(());
    }

    let rows = vendors.iter().map(|v| {
        TableRow::new(v.id.clone())
            .cell("id", CellValue::Id(v.id.clone()))
            .cell("name", CellValue::Text(v.name.clone()))
            .cell("contact", CellValue::Text(v.contact.clone()))
    });

    let table_config = if global.quiet {
        TableConfig::for_pipe()
    } else {
        TableConfig::default()
    };
    TableFormatter::new(COLUMNS, "vendor")
        .with_config(table_config)
        .output(rows.collect(), format)
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (name, contact) = if args.interactive {
        let prompter = FormPrompter::new();
        (
            prompter.text_or(args.name, "Name")?,
            prompter.text_or(args.contact, "Contact")?,
        )
    } else {
        (args.name.unwrap_or_default(), args.contact.unwrap_or_default())
    };

    let config = Config::load();
    let mut repo = open_repository(global, &config)?;
    let vendor = repo.add_vendor(&name, &contact)?;

    if global.quiet {
        println!("{}", vendor.id);
        return Ok(());
    }

    println!(
        "{} Created vendor {}",
        style("✓").green(),
        style(&vendor.id).cyan()
    );
    println!("   Name: {}", style(&vendor.name).yellow());
    if !vendor.contact.is_empty() {
        println!("   Contact: {}", vendor.contact);
    }

    Ok(())
}
