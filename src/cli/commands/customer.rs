//! `napkin customer` command - Customer management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::utils::{effective_format, open_repository, print_structured};
use crate::cli::prompt::FormPrompter;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::Customer;

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List customers in the order they were added
    List(ListArgs),

    /// Create a new customer
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in name and email (case-insensitive)
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
    /// Customer name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Email address
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Interactive mode (prompt for missing fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 17),
    ColumnDef::new("name", "NAME", 30),
    ColumnDef::new("email", "EMAIL", 36),
];

/// Run a customer subcommand
pub fn run(cmd: CustomerCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CustomerCommands::List(args) => run_list(args, global),
        CustomerCommands::New(args) => run_new(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let repo = open_repository(global, &config)?;

    let customers: Vec<&Customer> = repo
        .customers()
        .iter()
        .filter(|c| {
            args.search.as_ref().map_or(true, |search| {
                let search = search.to_lowercase();
                c.name.to_lowercase().contains(&search) || c.email.to_lowercase().contains(&search)
            })
        })
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if args.count {
        println!("{}", customers.len());
        return Ok(());
    }

    let format = effective_format(global, &config, OutputFormat::Tsv);
    if print_structured(&customers, format)? {
        return Ok(());
    }

    if customers.is_empty() && format == OutputFormat::Tsv {
        println!("No customers found.");
        return Ok(());
    }

    let rows = customers.iter().map(|c| {
        TableRow::new(c.id.clone())
            .cell("id", CellValue::Id(c.id.clone()))
            .cell("name", CellValue::Text(c.name.clone()))
            .cell("email", CellValue::Text(c.email.clone()))
    });

    let table_config = if global.quiet {
        TableConfig::for_pipe()
    } else {
        TableConfig::default()
    };
    TableFormatter::new(COLUMNS, "customer")
        .with_config(table_config)
        .output(rows.collect(), format)
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (name, email) = if args.interactive {
        let prompter = FormPrompter::new();
        (
            prompter.text_or(args.name, "Name")?,
            prompter.text_or(args.email, "Email")?,
        )
    } else {
        (args.name.unwrap_or_default(), args.email.unwrap_or_default())
    };

    let config = Config::load();
    let mut repo = open_repository(global, &config)?;
    let customer = repo.add_customer(&name, &email)?;

    if global.quiet {
        println!("{}", customer.id);
        return Ok(());
    }

    println!(
        "{} Created customer {}",
        style("✓").green(),
        style(&customer.id).cyan()
    );
    println!("   Name: {}", style(&customer.name).yellow());
    if !customer.email.is_empty() {
        println!("   Email: {}", customer.email);
    }

    Ok(())
}
