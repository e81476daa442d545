//! Shared utilities for CLI commands

use clap::ValueEnum;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Named;
use crate::core::{Config, RecordStore, Repository};

/// Open the repository at the configured data directory
pub fn open_repository(global: &GlobalOpts, config: &Config) -> Result<Repository> {
    let store_config = config.store_config(global.data_dir.as_deref());
    let store = RecordStore::open(&store_config)?;
    Ok(Repository::open(store)?)
}

/// Resolve `auto` to the configured default, falling back to `fallback`
pub fn effective_format(
    global: &GlobalOpts,
    config: &Config,
    fallback: OutputFormat,
) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }

    config
        .default_format
        .as_deref()
        .and_then(|s| OutputFormat::from_str(s, true).ok())
        .filter(|f| *f != OutputFormat::Auto)
        .unwrap_or(fallback)
}

/// Print serializable data as JSON or YAML; returns false for other formats
pub fn print_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).into_diagnostic()?;
            println!("{}", json);
            Ok(true)
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(value).into_diagnostic()?;
            print!("{}", yaml);
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Format a soft reference with the referenced record's name
///
/// Returns "Acme (VEND-01J...)" when the id resolves, or the bare id when it
/// does not; dangling references are legal.
pub fn format_reference<T: Named>(id: &str, records: &[T]) -> String {
    match records.iter().find(|r| r.id() == id) {
        Some(record) => format!("{} ({})", record.name(), id),
        None => id.to_string(),
    }
}
