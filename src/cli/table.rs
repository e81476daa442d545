//! Table formatting utilities for CLI list commands
//!
//! Every entity `list` command builds `TableRow`s and hands them to a
//! `TableFormatter`, which renders aligned columns, CSV, Markdown, or bare IDs.

use chrono::{DateTime, Local, Utc};
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_short_id, truncate_str};
use crate::cli::OutputFormat;

/// Configuration for table output
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Show summary line after table (e.g., "5 customer(s) found")
    pub show_summary: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { show_summary: true }
    }
}

impl TableConfig {
    /// Create config optimized for piping (no summary)
    pub fn for_pipe() -> Self {
        Self {
            show_summary: false,
        }
    }
}

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Record ID (truncated in columns, cyan colored)
    Id(String),
    /// Plain text, truncated to the column width
    Text(String),
    /// Timestamp displayed in local time
    DateTime(DateTime<Utc>),
    /// Empty/placeholder
    Empty,
}

impl CellValue {
    /// Format for aligned column output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => {
                format!("{:<width$}", style(format_short_id(id)).cyan(), width = width)
            }
            CellValue::Text(s) if s.is_empty() => {
                format!("{:<width$}", style("-").dim(), width = width)
            }
            CellValue::Text(s) => {
                format!("{:<width$}", truncate_str(s, width), width = width)
            }
            CellValue::DateTime(_) => format!("{:<width$}", self.raw(), width = width),
            CellValue::Empty => format!("{:<width$}", "-", width = width),
        }
    }

    /// Get raw string value (no truncation, no colors)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(id) => id.clone(),
            CellValue::Text(s) => s.clone(),
            CellValue::DateTime(dt) => {
                let local: DateTime<Local> = dt.with_timezone(&Local);
                local.format("%Y-%m-%d %H:%M").to_string()
            }
            CellValue::Empty => String::new(),
        }
    }

    /// Format for Markdown output (escaped pipes)
    pub fn format_md(&self) -> String {
        match self {
            CellValue::Empty => "-".to_string(),
            other => other.raw().replace('|', "\\|"),
        }
    }

    /// Get the display width of this cell's content (for dynamic column sizing)
    pub fn display_width(&self) -> usize {
        match self {
            CellValue::Id(id) => id.chars().count().min(16),
            CellValue::Text(s) => s.chars().count().max(1),
            CellValue::DateTime(_) => 16, // "YYYY-MM-DD HH:MM"
            CellValue::Empty => 1,
        }
    }
}

/// Column definition with header label and maximum width
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// A row of cell values for table output
pub struct TableRow {
    pub full_id: String,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(full_id: impl Into<String>) -> Self {
        Self {
            full_id: full_id.into(),
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Table formatter that renders rows in various formats
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    entity_name: &'static str,
    config: TableConfig,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], entity_name: &'static str) -> Self {
        Self {
            columns,
            entity_name,
            config: TableConfig::default(),
        }
    }

    /// Configure the formatter with custom settings
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Print rows in the specified format
    pub fn output(&self, rows: Vec<TableRow>, format: OutputFormat) -> Result<()> {
        print!("{}", self.render(&rows, format)?);
        Ok(())
    }

    /// Render rows in the specified format
    pub fn render(&self, rows: &[TableRow], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => Ok(self.render_md(rows)),
            OutputFormat::Id => Ok(rows.iter().map(|r| format!("{}\n", r.full_id)).collect()),
            _ => Ok(self.render_tsv(rows)),
        }
    }

    /// Calculate dynamic column widths based on actual content
    fn calculate_widths(&self, rows: &[TableRow]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                let max_content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);
                // Grow to fit the header or content, but never past the column cap
                col.header.len().max(max_content).min(col.width)
            })
            .collect()
    }

    fn render_tsv(&self, rows: &[TableRow]) -> String {
        let widths = self.calculate_widths(rows);
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:<width$}", style(col.header).bold(), width = *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in rows {
            let parts: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, w)| match row.get(col.key) {
                    Some(value) => value.format_tsv(*w),
                    None => CellValue::Empty.format_tsv(*w),
                })
                .collect();
            out.push_str(parts.join(" ").trim_end());
            out.push('\n');
        }

        if self.config.show_summary {
            out.push('\n');
            out.push_str(&format!(
                "{} {}(s) found.\n",
                style(rows.len()).cyan(),
                self.entity_name
            ));
        }

        out
    }

    fn render_csv(&self, rows: &[TableRow]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.columns.iter().map(|c| c.key))
            .into_diagnostic()?;

        for row in rows {
            writer
                .write_record(
                    self.columns
                        .iter()
                        .map(|c| row.get(c.key).map(CellValue::raw).unwrap_or_default()),
                )
                .into_diagnostic()?;
        }

        let bytes = writer.into_inner().into_diagnostic()?;
        String::from_utf8(bytes).into_diagnostic()
    }

    fn render_md(&self, rows: &[TableRow]) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().map(|c| c.header));

        for row in rows {
            builder.push_record(self.columns.iter().map(|c| {
                row.get(c.key)
                    .map(CellValue::format_md)
                    .unwrap_or_else(|| "-".to_string())
            }));
        }

        format!("{}\n", builder.build().with(Style::markdown()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("id", "ID", 17),
        ColumnDef::new("name", "NAME", 10),
    ];

    fn rows() -> Vec<TableRow> {
        vec![
            TableRow::new("c1")
                .cell("id", CellValue::Id("c1".to_string()))
                .cell("name", CellValue::Text("Bob, Jr.".to_string())),
            TableRow::new("c2")
                .cell("id", CellValue::Id("c2".to_string()))
                .cell("name", CellValue::Text("Pipe|Co".to_string())),
        ]
    }

    #[test]
    fn test_csv_quotes_commas() {
        let out = TableFormatter::new(COLUMNS, "customer")
            .render(&rows(), OutputFormat::Csv)
            .unwrap();
        assert_eq!(out, "id,name\nc1,\"Bob, Jr.\"\nc2,Pipe|Co\n");
    }

    #[test]
    fn test_id_format_lists_full_ids() {
        let out = TableFormatter::new(COLUMNS, "customer")
            .render(&rows(), OutputFormat::Id)
            .unwrap();
        assert_eq!(out, "c1\nc2\n");
    }

    #[test]
    fn test_md_escapes_pipes() {
        let out = TableFormatter::new(COLUMNS, "customer")
            .render(&rows(), OutputFormat::Md)
            .unwrap();
        assert!(out.contains("| ID"));
        assert!(out.contains("Pipe\\|Co"));
    }

    #[test]
    fn test_tsv_summary_can_be_disabled() {
        console::set_colors_enabled(false);
        let with_summary = TableFormatter::new(COLUMNS, "customer")
            .render(&rows(), OutputFormat::Tsv)
            .unwrap();
        assert!(with_summary.contains("2 customer(s) found."));

        let piped = TableFormatter::new(COLUMNS, "customer")
            .with_config(TableConfig::for_pipe())
            .render(&rows(), OutputFormat::Tsv)
            .unwrap();
        assert!(!piped.contains("found"));
        assert!(piped.contains("Bob, Jr."));
    }
}
