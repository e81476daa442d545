//! Keyword command classifier
//!
//! Maps free text to an action label by checking, in a fixed priority order,
//! whether the lowercased text contains one of the entity keywords. The result
//! is informational only: nothing here touches the repository.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Action labels the classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddCustomer,
    AddVendor,
    AddProduct,
    AddOrder,
    Unknown,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::AddCustomer => "add_customer",
            Action::AddVendor => "add_vendor",
            Action::AddProduct => "add_product",
            Action::AddOrder => "add_order",
            Action::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords in priority order; the first one contained in the input wins
const KEYWORDS: [(&str, Action); 4] = [
    ("customer", Action::AddCustomer),
    ("vendor", Action::AddVendor),
    ("product", Action::AddProduct),
    ("order", Action::AddOrder),
];

/// Classifier output: the chosen action plus the input echoed back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub action: Action,
    pub details: String,
}

/// Classify free text
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();
    let action = KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(Action::Unknown, |(_, action)| *action);

    Classification {
        action,
        details: text.to_string(),
    }
}

/// Entry point for the command box: trims, rejects blank input, classifies
pub fn process_command(input: &str) -> Result<Classification, ClassifyError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ClassifyError::EmptyCommand);
    }
    Ok(classify(text))
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Please enter a command.")]
    #[diagnostic(code(napkin::command::empty))]
    EmptyCommand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_keyword() {
        let input = "Please add a new customer named Bob";
        assert_eq!(
            classify(input),
            Classification {
                action: Action::AddCustomer,
                details: input.to_string(),
            }
        );
    }

    #[test]
    fn test_no_keyword_is_unknown() {
        let result = classify("xyz");
        assert_eq!(result.action, Action::Unknown);
        assert_eq!(result.details, "xyz");
    }

    #[test]
    fn test_keyword_priority_order() {
        assert_eq!(classify("order a product from a vendor").action, Action::AddVendor);
        assert_eq!(classify("product order").action, Action::AddProduct);
        assert_eq!(classify("vendor for customer").action, Action::AddCustomer);
        assert_eq!(classify("reorder please").action, Action::AddOrder);
    }

    #[test]
    fn test_matching_is_case_insensitive_but_details_are_not() {
        let result = classify("New VENDOR: Acme");
        assert_eq!(result.action, Action::AddVendor);
        assert_eq!(result.details, "New VENDOR: Acme");
    }

    #[test]
    fn test_empty_command_rejected() {
        assert_eq!(process_command(""), Err(ClassifyError::EmptyCommand));
        assert_eq!(process_command("   \t"), Err(ClassifyError::EmptyCommand));
    }

    #[test]
    fn test_process_command_trims_input() {
        let result = process_command("  add product Widget \n").unwrap();
        assert_eq!(result.action, Action::AddProduct);
        assert_eq!(result.details, "add product Widget");
    }

    #[test]
    fn test_action_serializes_as_label() {
        let json = serde_json::to_string(&classify("xyz")).unwrap();
        assert_eq!(json, r#"{"action":"unknown","details":"xyz"}"#);
        assert_eq!(Action::AddOrder.to_string(), "add_order");
    }
}
