//! JSON-file storage adapter.
//!
//! The whole store is one JSON object on disk. Writes are read-modify-write
//! under an in-process lock and land through temp file + rename, so a crash
//! mid-write leaves the previous file intact.

use crate::error::StorageError;
use crate::storage::SetStorage;

use common::ErrorLocation;

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

const TEMP_FILE_SUFFIX: &str = ".tmp";

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one value back. A missing file or key is `Ok(None)`.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(StorageError::ReadError {
                    location: ErrorLocation::from(Location::caller()),
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents).map_err(|e| StorageError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteError {
                    location: ErrorLocation::from(Location::caller()),
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let json =
            serde_json::to_string_pretty(entries).map_err(|e| StorageError::SerializeError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            })?;

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(TEMP_FILE_SUFFIX);
        let temp_path = PathBuf::from(temp_path);

        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| StorageError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: temp_path.clone(),
                source: e,
            })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            })
    }
}

impl SetStorage for FileStorage {
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(key.to_owned(), value);
        self.write_entries(&entries).await?;

        debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }
}
