//! JSON file store
//!
//! All keys live in one JSON object. Each `set` or `set_many` rewrites the
//! file once through a temporary sibling and an atomic rename, so a crash
//! mid-write leaves the previous version intact. An unreadable file opens
//! as an empty store.

use super::KeyValueStore;
use crate::error::StorageError;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct JsonFileStore {
    path: PathBuf,
    temp_path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file is missing or
    /// cannot be parsed
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let temp_path = path.with_extension("tmp.json");
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                if path.exists() {
                    warn!(path = %path.display(), error = %e, "Discarding unreadable state file");
                }
                Map::new()
            }
        };

        Self {
            path,
            temp_path,
            values,
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StorageError::io("creating state dir", e))?;
        }

        let file = File::create(&self.temp_path)
            .map_err(|e| StorageError::io("creating temp state file", e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.values)?;
        writer
            .flush()
            .map_err(|e| StorageError::io("writing temp state file", e))?;

        fs::rename(&self.temp_path, &self.path)
            .map_err(|e| StorageError::io("renaming state file", e))?;

        debug!(path = %self.path.display(), "State saved");
        Ok(())
    }
}

fn read_values(path: &Path) -> Result<Map<String, Value>, StorageError> {
    let file = File::open(path).map_err(|e| StorageError::io("opening state file", e))?;
    let values = serde_json::from_reader(BufReader::new(file))?;
    Ok(values)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn set_many(&mut self, entries: Vec<(&str, Value)>) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.values.insert(key.to_string(), value);
        }
        self.flush()
    }
}
