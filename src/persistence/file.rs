//! JSON file backend
//!
//! The whole map is rewritten on every set: write `<path>.tmp`, then rename
//! over `<path>` so a crash never leaves a half-written save.

use std::path::{Path, PathBuf};

use super::{MemoryStore, ScalarStore, StoreError};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: MemoryStore,
}

impl JsonFileStore {
    /// Open a store, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No save at {}, starting fresh", path.display());
                MemoryStore::new()
            }
            Err(err) => return Err(err.into()),
        };
        log::info!("Opened {} ({} keys)", path.display(), values.len());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScalarStore for JsonFileStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.set_int(key, value)?;
        self.flush()
    }

    fn get_real(&self, key: &str) -> Option<f64> {
        self.values.get_real(key)
    }

    fn set_real(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        self.values.set_real(key, value)?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("candy_sort_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get_int("anything"), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set_int("level", 7).unwrap();
            store.set_real("record", 42.5).unwrap();
        }
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get_int("level"), Some(7));
        assert_eq!(store.get_real("record"), Some(42.5));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_nan_never_reaches_disk() {
        let path = temp_path("nan");
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set_int("level", 7).unwrap();
            assert!(matches!(
                store.set_real("record", f64::NAN),
                Err(StoreError::NonFinite(_))
            ));
        }
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get_int("level"), Some(7));
        assert_eq!(store.get_real("record"), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Json(_))));
        let _ = std::fs::remove_file(&path);
    }
}
