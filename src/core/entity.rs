//! Entity traits - common interface for all record types

use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::EntityPrefix;

/// Common trait for all napkin records
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// The id prefix for freshly generated records (e.g., "CUST")
    const PREFIX: EntityPrefix;

    /// Collection name, also the stem of the backing file
    const COLLECTION: &'static str;

    /// Singular label used in messages
    const LABEL: &'static str;

    /// Get the record's identifier
    fn id(&self) -> &str;
}

/// Records that carry a human-readable name
pub trait Named: Entity {
    fn name(&self) -> &str;
}
