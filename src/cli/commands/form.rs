//! `napkin form` - Interactive form-based entry
//!
//! One section per entity kind plus the command box. Selection lists are
//! rebuilt from the repository on every pass, so a vendor added in one pass
//! can be picked for a product in the next.

use console::style;
use miette::Result;

use crate::cli::commands::command::print_classification;
use crate::cli::commands::utils::open_repository;
use crate::cli::prompt::FormPrompter;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::core::classifier::process_command;
use crate::core::Repository;

#[derive(clap::Args, Debug)]
pub struct FormArgs {}

const SECTIONS: &[&str] = &["Customers", "Vendors", "Products", "Orders", "Command", "Quit"];

pub fn run(_args: FormArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let mut repo = open_repository(global, &config)?;
    let prompter = FormPrompter::new();

    println!(
        "{} {}",
        style("Napkin ERP").bold(),
        style(repo.store().root().display()).dim()
    );

    loop {
        let section = prompter.menu("Section", SECTIONS)?;
        match section {
            0 => customer_section(&mut repo, &prompter)?,
            1 => vendor_section(&mut repo, &prompter)?,
            2 => product_section(&mut repo, &prompter)?,
            3 => order_section(&mut repo, &prompter)?,
            4 => command_section(&prompter)?,
            _ => break,
        }
        println!();
    }

    Ok(())
}

fn customer_section(repo: &mut Repository, prompter: &FormPrompter) -> Result<()> {
    let name = prompter.text("Name")?;
    let email = prompter.text("Email")?;
    let customer = repo.add_customer(&name, &email)?;
    created("customer", &customer.id);
    Ok(())
}

fn vendor_section(repo: &mut Repository, prompter: &FormPrompter) -> Result<()> {
    let name = prompter.text("Name")?;
    let contact = prompter.text("Contact")?;
    let vendor = repo.add_vendor(&name, &contact)?;
    created("vendor", &vendor.id);
    Ok(())
}

fn product_section(repo: &mut Repository, prompter: &FormPrompter) -> Result<()> {
    let name = prompter.text("Name")?;
    let Some(vendor) = prompter.select_name("Vendor", &repo.vendor_names())? else {
        skipped("no vendors to choose from");
        return Ok(());
    };

    match repo.add_product_for_vendor(&name, &vendor)? {
        Some(product) => created("product", &product.id),
        None => skipped("vendor not found"),
    }
    Ok(())
}

fn order_section(repo: &mut Repository, prompter: &FormPrompter) -> Result<()> {
    let Some(customer) = prompter.select_name("Customer", &repo.customer_names())? else {
        skipped("no customers to choose from");
        return Ok(());
    };
    let Some(product) = prompter.select_name("Product", &repo.product_names())? else {
        skipped("no products to choose from");
        return Ok(());
    };

    match repo.add_order_for(&customer, &product)? {
        Some(order) => created("order", &order.id),
        None => skipped("customer or product not found"),
    }
    Ok(())
}

fn command_section(prompter: &FormPrompter) -> Result<()> {
    let text = prompter.text("Enter command")?;
    match process_command(&text) {
        Ok(result) => print_classification(&result, OutputFormat::Auto),
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            Ok(())
        }
    }
}

fn created(kind: &str, id: &str) {
    println!("{} Created {} {}", style("✓").green(), kind, style(id).cyan());
}

fn skipped(reason: &str) {
    println!("{} Nothing created: {}", style("!").yellow(), reason);
}
