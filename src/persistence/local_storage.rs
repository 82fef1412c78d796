//! Browser LocalStorage backend (wasm32 only)
//!
//! Each key is stored as its own string item.

use super::{ScalarStore, StoreError};

#[derive(Debug)]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage
            .set_item(key, &value)
            .map_err(|_| StoreError::Unavailable)
    }
}

impl ScalarStore for LocalStorageStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.parse().ok()
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.set(key, value.to_string())
    }

    fn get_real(&self, key: &str) -> Option<f64> {
        self.get(key)?.parse().ok()
    }

    fn set_real(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        if !value.is_finite() {
            return Err(StoreError::NonFinite(value));
        }
        self.set(key, value.to_string())
    }
}
