//! Product entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, Named};
use crate::core::identity::{EntityId, EntityPrefix};

/// A product offered by a vendor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: String,

    /// Display name, used for lookups
    pub name: String,

    /// Soft reference to `Vendor::id`; never checked against the vendor list
    pub vendor_id: String,
}

impl Entity for Product {
    const PREFIX: EntityPrefix = EntityPrefix::Prod;
    const COLLECTION: &'static str = "products";
    const LABEL: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Product {
    /// Create a new product with a freshly generated id
    pub fn new(name: impl Into<String>, vendor_id: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(Self::PREFIX).into(),
            name: name.into(),
            vendor_id: vendor_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_keeps_vendor_id_verbatim() {
        let product = Product::new("Widget", "nonexistent-vendor-id");
        assert_eq!(product.vendor_id, "nonexistent-vendor-id");

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["vendor_id"], "nonexistent-vendor-id");
    }
}
