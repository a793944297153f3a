//! Key/value persistence protocol.

pub mod file_storage;

pub use file_storage::FileStorage;

use crate::error::StorageError;

use std::future::Future;

use serde_json::Value;

/// Write capability a usecase needs from a persistence adapter.
pub trait SetStorage: Send + Sync {
    fn set(
        &self,
        key: &str,
        value: Value,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
