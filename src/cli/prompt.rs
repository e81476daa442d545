//! Interactive prompts for form-style data entry
//!
//! Text fields accept anything, including empty input. Selection lists are
//! built from record names, so the caller rebuilds them after every create.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

/// Prompts sharing one theme
pub struct FormPrompter {
    theme: ColorfulTheme,
}

impl Default for FormPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Free-text field; empty input is allowed
    pub fn text(&self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()
    }

    /// Use `value` if given, otherwise ask for it
    pub fn text_or(&self, value: Option<String>, prompt: &str) -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => self.text(prompt),
        }
    }

    /// Pick one name from a list; `None` when there is nothing to pick from
    pub fn select_name(&self, prompt: &str, names: &[String]) -> Result<Option<String>> {
        if names.is_empty() {
            return Ok(None);
        }

        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(names)
            .default(0)
            .interact()
            .into_diagnostic()?;
        Ok(names.get(selection).cloned())
    }

    /// Pick an index from a fixed menu
    pub fn menu(&self, prompt: &str, items: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .into_diagnostic()
    }
}
