//! JSON-file record store
//!
//! Every collection lives in its own `<name>.json` file inside the data
//! directory, holding a pretty-printed JSON array. Saves always rewrite the
//! whole file; there is no locking, so the last writer wins.

use miette::Diagnostic;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "erp_data";

/// Where the store keeps its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// A directory of JSON collection files
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Open the store, creating the data directory if it is missing
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let root = config.data_dir.clone();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        tracing::debug!(path = %root.display(), "opened record store");
        Ok(Self { root })
    }

    /// Get the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the backing file for a collection
    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Load a collection; a collection that was never saved is empty
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let path = self.collection_path(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(collection = name, "no file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let records: Vec<T> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(collection = name, count = records.len(), "loaded collection");
        Ok(records)
    }

    /// Overwrite a collection's file with the full sequence
    pub fn save<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        let path = self.collection_path(name);
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        fs::write(&path, format!("{json}\n")).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(collection = name, count = records.len(), "saved collection");
        Ok(())
    }
}

/// Errors raised by the record store
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("I/O error on {path:?}: {source}")]
    #[diagnostic(code(napkin::store::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    #[diagnostic(
        code(napkin::store::json),
        help("the file must hold a JSON array of records; fix or remove it")
    )]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Customer, Vendor};
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_data_dir() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("nested/erp_data");

        let store = RecordStore::open(&StoreConfig::new(&dir)).unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.root(), dir.as_path());
    }

    #[test]
    fn test_load_missing_collection_is_empty() {
        let tmp = tempdir().unwrap();
        let store = RecordStore::open(&StoreConfig::new(tmp.path())).unwrap();

        let customers: Vec<Customer> = store.load("customers").unwrap();
        assert!(customers.is_empty());
        assert!(!store.collection_path("customers").exists());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let tmp = tempdir().unwrap();
        let store = RecordStore::open(&StoreConfig::new(tmp.path())).unwrap();
        let vendors = vec![Vendor::new("Acme", "road runner"), Vendor::new("Globex", "")];

        store.save("vendors", &vendors).unwrap();
        let loaded: Vec<Vendor> = store.load("vendors").unwrap();

        assert_eq!(loaded, vendors);
    }

    #[test]
    fn test_save_overwrites_and_indents() {
        let tmp = tempdir().unwrap();
        let store = RecordStore::open(&StoreConfig::new(tmp.path())).unwrap();

        store
            .save("customers", &[Customer::new("First", "a@example.com")])
            .unwrap();
        store
            .save("customers", &[Customer::new("Second", "b@example.com")])
            .unwrap();

        let content = fs::read_to_string(store.collection_path("customers")).unwrap();
        assert!(content.contains("\n  {\n    \"id\""));
        assert!(!content.contains("First"));
        let loaded: Vec<Customer> = store.load("customers").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Second");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let store = RecordStore::open(&StoreConfig::new(tmp.path())).unwrap();
        fs::write(store.collection_path("orders"), "{ not json").unwrap();

        let err = store.load::<serde_json::Value>("orders").unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn test_loads_foreign_ids_unchanged() {
        let tmp = tempdir().unwrap();
        let store = RecordStore::open(&StoreConfig::new(tmp.path())).unwrap();
        fs::write(
            store.collection_path("vendors"),
            r#"[{"id": "6f1c2a9e-2b1d-4c53-9d0e-3c8b2f1a7e44", "name": "Acme", "contact": ""}]"#,
        )
        .unwrap();

        let vendors: Vec<Vendor> = store.load("vendors").unwrap();
        assert_eq!(vendors[0].id, "6f1c2a9e-2b1d-4c53-9d0e-3c8b2f1a7e44");
    }
}
