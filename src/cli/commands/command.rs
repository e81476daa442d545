//! `napkin command` - Classify a free-text command
//!
//! The classifier only labels the text; no record is created or changed.

use console::style;
use miette::Result;

use crate::cli::commands::utils::print_structured;
use crate::cli::prompt::FormPrompter;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::classifier::{process_command, Classification};

#[derive(clap::Args, Debug)]
pub struct CommandArgs {
    /// Command text, e.g. "add a new customer named Bob" (prompted if omitted)
    pub text: Vec<String>,
}

pub fn run(args: CommandArgs, global: &GlobalOpts) -> Result<()> {
    let text = if args.text.is_empty() {
        FormPrompter::new().text("Enter command")?
    } else {
        args.text.join(" ")
    };

    let result = process_command(&text)?;
    print_classification(&result, global.format)
}

/// Show a classification the way the command box reports it
pub fn print_classification(result: &Classification, format: OutputFormat) -> Result<()> {
    if print_structured(result, format)? {
        return Ok(());
    }

    println!("{}: {}", style("Action").bold(), style(result.action).cyan());
    println!("{}: {}", style("Details").bold(), result.details);
    Ok(())
}
