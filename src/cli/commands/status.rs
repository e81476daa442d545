//! `napkin status` command - Record counts per collection

use console::style;
use miette::Result;

use crate::cli::commands::utils::{open_repository, print_structured};
use crate::cli::GlobalOpts;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let repo = open_repository(global, &config)?;
    let summary = repo.summary();

    if print_structured(&summary, global.format)? {
        return Ok(());
    }

    println!(
        "{} {}",
        style("Napkin ERP").bold(),
        style(repo.store().root().display()).dim()
    );
    println!("{}", style("─".repeat(40)).dim());
    println!("  {:<12} {}", "Customers", style(summary.customers).cyan());
    println!("  {:<12} {}", "Vendors", style(summary.vendors).cyan());
    println!("  {:<12} {}", "Products", style(summary.products).cyan());
    println!("  {:<12} {}", "Orders", style(summary.orders).cyan());

    Ok(())
}
