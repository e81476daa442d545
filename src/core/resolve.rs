//! Name-to-record lookup
//!
//! Selection lists show names, but dependent records store ids. These helpers
//! translate one into the other before a product or order is created.

use crate::core::entity::Named;

/// Find the first record whose name equals `name` exactly (case-sensitive)
///
/// Duplicate names resolve to the earliest record in insertion order.
pub fn find_by_name<'a, T: Named>(records: &'a [T], name: &str) -> Option<&'a T> {
    records.iter().find(|r| r.name() == name)
}

/// Resolve a name straight to its record id
pub fn resolve_id<'a, T: Named>(records: &'a [T], name: &str) -> Option<&'a str> {
    find_by_name(records, name).map(|r| r.id())
}

/// Names of all records in insertion order, for selection lists
pub fn names<T: Named>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Vendor;

    fn vendor(id: &str, name: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: name.to_string(),
            contact: String::new(),
        }
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let vendors = vec![vendor("v1", "Acme"), vendor("v2", "Acme")];

        let found = find_by_name(&vendors, "Acme").unwrap();
        assert_eq!(found.id, "v1");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let vendors = vec![vendor("v1", "Acme")];

        assert!(find_by_name(&vendors, "acme").is_none());
        assert!(find_by_name(&vendors, "Acme ").is_none());
        assert_eq!(resolve_id(&vendors, "Acme"), Some("v1"));
    }

    #[test]
    fn test_missing_name_is_none() {
        let vendors: Vec<Vendor> = Vec::new();
        assert!(resolve_id(&vendors, "Acme").is_none());
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let vendors = vec![vendor("v2", "Zeta"), vendor("v1", "Alpha"), vendor("v3", "Zeta")];
        assert_eq!(names(&vendors), vec!["Zeta", "Alpha", "Zeta"]);
    }
}
