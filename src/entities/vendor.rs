//! Vendor entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Named};
use crate::core::identity::{EntityId, EntityPrefix};

/// A vendor that supplies products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier
    pub id: String,

    /// Display name, used for lookups
    pub name: String,

    /// Contact details (person, phone, email - free text)
    pub contact: String,
}

impl Entity for Vendor {
    const PREFIX: EntityPrefix = EntityPrefix::Vend;
    const COLLECTION: &'static str = "vendors";
    const LABEL: &'static str = "vendor";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Vendor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Vendor {
    /// Create a new vendor with a freshly generated id
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(Self::PREFIX).into(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}
