//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use crate::core::identity::{EntityId, EntityPrefix};

/// Format an ID for display, truncating if too long
///
/// IDs longer than 16 characters are truncated to 13 chars with "..." suffix.
pub fn format_short_id(id: &str) -> String {
    truncate_str(id, 16)
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Whether `id` looks like one this tool generated for the given entity kind
///
/// Purely informational: references are stored as given either way.
pub fn is_native_id(id: &str, prefix: EntityPrefix) -> bool {
    EntityId::parse(id).is_ok_and(|parsed| parsed.prefix() == prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_id() {
        let id = EntityId::new(EntityPrefix::Cust).to_string();
        let formatted = format_short_id(&id);
        assert_eq!(formatted.chars().count(), 16);
        assert!(formatted.ends_with("..."));
        assert_eq!(format_short_id("c1"), "c1");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Grüße aus Köln", 8), "Grüße...");
    }

    #[test]
    fn test_is_native_id() {
        let vend = EntityId::new(EntityPrefix::Vend).to_string();
        assert!(is_native_id(&vend, EntityPrefix::Vend));
        assert!(!is_native_id(&vend, EntityPrefix::Cust));
        assert!(!is_native_id("nonexistent-vendor-id", EntityPrefix::Vend));
    }
}
