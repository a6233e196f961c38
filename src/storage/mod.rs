//! Persistence through a string-keyed JSON store
//!
//! The game never depends on a write succeeding: reads fall back to a
//! supplied default and failed writes are logged and dropped.

mod file;
pub mod keys;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// A string-keyed store of JSON values
pub trait KeyValueStore {
    /// Stored value for `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value for `key`
    ///
    /// # Errors
    /// Returns `StorageError` if the value could not be made durable.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Replace several values as one write
    ///
    /// Durable stores override this so the entries land together; the
    /// default falls back to one `set` per entry.
    ///
    /// # Errors
    /// Returns `StorageError` if the values could not be made durable.
    fn set_many(&mut self, entries: Vec<(&str, Value)>) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Read `key` as a `T`, falling back to `default` when it is missing or
/// does not have the expected shape
pub fn load_or<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(value) = store.get(key) else {
        return default;
    };
    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed stored value");
            default
        }
    }
}

/// Best-effort write of `value` under `key`
///
/// Returns whether the write went through; failures are logged, not retried.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let result = serde_json::to_value(value)
        .map_err(StorageError::from)
        .and_then(|json| store.set(key, json));

    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(key, error = %e, "Failed to persist value");
            false
        }
    }
}

/// Serialize `value` into an entry for [`save_all`]
///
/// # Errors
/// Returns `StorageError::Json` if `value` cannot be represented as JSON.
pub fn entry<'k, T>(key: &'k str, value: &T) -> Result<(&'k str, Value), StorageError>
where
    T: Serialize + ?Sized,
{
    Ok((key, serde_json::to_value(value)?))
}

/// Best-effort write of several entries as one batch
///
/// Either every entry is serialized and handed to the store together, or
/// nothing is written. Returns whether the batch went through.
pub fn save_all<'k, S, I>(store: &mut S, entries: I) -> bool
where
    S: KeyValueStore + ?Sized,
    I: IntoIterator<Item = Result<(&'k str, Value), StorageError>>,
{
    let result = entries
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .and_then(|entries| store.set_many(entries));

    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Failed to persist batch");
            false
        }
    }
}
