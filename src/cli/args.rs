//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    command::CommandArgs,
    completions::CompletionsArgs,
    customer::CustomerCommands,
    form::FormArgs,
    init::InitArgs,
    order::OrderCommands,
    product::ProductCommands,
    status::StatusArgs,
    vendor::VendorCommands,
};

#[derive(Parser)]
#[command(name = "napkin")]
#[command(author, version, about = "Napkin ERP")]
#[command(long_about = "A back-of-the-napkin ERP: customers, vendors, products, and orders kept as plain JSON files.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Data directory (default: $NAPKIN_DATA_DIR, config file, or ./erp_data)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory
    Init(InitArgs),

    /// Customer management
    #[command(subcommand, visible_alias = "cust")]
    Customer(CustomerCommands),

    /// Vendor management
    #[command(subcommand, visible_alias = "vend")]
    Vendor(VendorCommands),

    /// Product management (products belong to vendors)
    #[command(subcommand, visible_alias = "prod")]
    Product(ProductCommands),

    /// Order management (a customer ordering a product)
    #[command(subcommand, visible_alias = "ord")]
    Order(OrderCommands),

    /// Classify a free-text command (no records are changed)
    #[command(visible_alias = "cmd")]
    Command(CommandArgs),

    /// Interactive form-based entry
    Form(FormArgs),

    /// Show record counts
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for list, text otherwise)
    #[default]
    Auto,
    /// Aligned columns (for reading)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
