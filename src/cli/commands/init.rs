//! `napkin init` command - Create the data directory

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Config, RecordStore};

#[derive(clap::Args, Debug)]
pub struct InitArgs {}

pub fn run(_args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let store_config = Config::load().store_config(global.data_dir.as_deref());
    let existed = store_config.data_dir.is_dir();
    let store = RecordStore::open(&store_config)?;

    if existed {
        println!(
            "{} Data directory already exists at {}",
            style("!").yellow(),
            style(store.root().display()).cyan()
        );
        return Ok(());
    }

    println!(
        "{} Initialized napkin data directory at {}",
        style("✓").green(),
        style(store.root().display()).cyan()
    );
    if !global.quiet {
        println!();
        println!("Next steps:");
        println!("  {} Add a vendor", style("napkin vendor new --name Acme").yellow());
        println!(
            "  {} Add a product",
            style("napkin product new --name Widget --vendor Acme").yellow()
        );
        println!("  {} Fill in records interactively", style("napkin form").yellow());
    }

    Ok(())
}
