//! Core module - storage, records, lookup, and classification

pub mod classifier;
pub mod config;
pub mod entity;
pub mod identity;
pub mod repository;
pub mod resolve;
pub mod store;

pub use classifier::{classify, process_command, Action, Classification, ClassifyError};
pub use config::Config;
pub use entity::{Entity, Named};
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use repository::{Repository, Summary};
pub use store::{RecordStore, StoreConfig, StoreError};
