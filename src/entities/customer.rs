//! Customer entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Named};
use crate::core::identity::{EntityId, EntityPrefix};

/// A customer who places orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: String,

    /// Display name, used for lookups
    pub name: String,

    /// Email address (free text, never validated)
    pub email: String,
}

impl Entity for Customer {
    const PREFIX: EntityPrefix = EntityPrefix::Cust;
    const COLLECTION: &'static str = "customers";
    const LABEL: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Customer {
    /// Create a new customer with a freshly generated id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(Self::PREFIX).into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_serializes_flat_fields() {
        let customer = Customer {
            id: "c1".to_string(),
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "c1", "name": "Bob", "email": "bob@example.com"})
        );
    }

    #[test]
    fn test_customer_new_accepts_empty_fields() {
        let customer = Customer::new("", "");
        assert!(customer.id.starts_with("CUST-"));
        assert!(customer.name.is_empty());
        assert!(customer.email.is_empty());
    }
}
