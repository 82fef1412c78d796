//! Key-addressed scalar storage
//!
//! Progress only needs read-current/write-new on a handful of integers and
//! reals. Backends:
//! - `MemoryStore`: in-process map (tests, ephemeral sessions)
//! - `JsonFileStore`: JSON object on disk, rewritten through a temp file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("cannot store non-finite value {0}")]
    NonFinite(f64),
}

/// Read/write contract for persisted counters
pub trait ScalarStore {
    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
    fn get_real(&self, key: &str) -> Option<f64>;
    fn set_real(&mut self, key: &str, value: f64) -> Result<(), StoreError>;
}

/// A stored scalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Int(i64),
    Real(f64),
}

impl StoreValue {
    fn as_int(self) -> Option<i64> {
        match self {
            StoreValue::Int(v) => Some(v),
            StoreValue::Real(_) => None,
        }
    }

    fn as_real(self) -> f64 {
        match self {
            StoreValue::Int(v) => v as f64,
            StoreValue::Real(v) => v,
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    values: BTreeMap<String, StoreValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ScalarStore for MemoryStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.as_int())
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), StoreValue::Int(value));
        Ok(())
    }

    fn get_real(&self, key: &str) -> Option<f64> {
        self.values.get(key).map(|v| v.as_real())
    }

    fn set_real(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        // JSON has no NaN/inf; they would serialize as null and break reloads
        if !value.is_finite() {
            return Err(StoreError::NonFinite(value));
        }
        self.values.insert(key.to_string(), StoreValue::Real(value));
        Ok(())
    }
}

impl<S: ScalarStore + ?Sized> ScalarStore for &mut S {
    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).set_int(key, value)
    }

    fn get_real(&self, key: &str) -> Option<f64> {
        (**self).get_real(key)
    }

    fn set_real(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        (**self).set_real(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_int("level"), None);
        store.set_int("level", 4).unwrap();
        store.set_real("record", 12.5).unwrap();
        assert_eq!(store.get_int("level"), Some(4));
        assert_eq!(store.get_real("record"), Some(12.5));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_int_reads_as_real() {
        let mut store = MemoryStore::new();
        store.set_int("record", 1000).unwrap();
        assert_eq!(store.get_real("record"), Some(1000.0));
        store.set_real("level", 2.5).unwrap();
        assert_eq!(store.get_int("level"), None);
    }

    #[test]
    fn test_non_finite_real_rejected() {
        let mut store = MemoryStore::new();
        store.set_real("record", 3.0).unwrap();
        assert!(matches!(
            store.set_real("record", f64::NAN),
            Err(StoreError::NonFinite(_))
        ));
        assert!(matches!(
            store.set_real("record", f64::INFINITY),
            Err(StoreError::NonFinite(_))
        ));
        assert_eq!(store.get_real("record"), Some(3.0));
    }

    #[test]
    fn test_json_shape() {
        let mut store = MemoryStore::new();
        store.set_int("a", 1).unwrap();
        store.set_real("b", 0.5).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"a":1,"b":0.5}"#);
        let back: MemoryStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
