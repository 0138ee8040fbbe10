//! Key-value store: whole values per key, no partial updates

use crate::error::StoreError;
use crate::io::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove every listed key; missing keys are ignored
    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError>;

    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::json(key, e)),
            None => Ok(None),
        }
    }

    fn set_as<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| StoreError::json(key, e))?;
        self.set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        (**self).remove(keys)
    }
}

/// Volatile store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
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

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.values.remove(*key);
        }
        Ok(())
    }
}

/// One `<key>.json` file per key, replaced atomically on every write
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io("", e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.key_path(key)?;
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(key, e)),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| StoreError::json(key, e))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        let json = serde_json::to_string_pretty(&value).map_err(|e| StoreError::json(key, e))?;
        atomic_write(&path, json.as_bytes()).map_err(|e| StoreError::io(key, e))
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            let path = self.key_path(key)?;
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::io(key, e)),
            }
        }
        Ok(())
    }
}
