//! In-memory store, used in tests and when no state file is wanted

use super::KeyValueStore;
use crate::error::StorageError;
use rustc_hash::FxHashMap;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
