use client_core::error::StorageError;
use client_core::storage::{FileStorage, SetStorage};
use client_core::usecases::{ACCESS_TOKEN_KEY, LocalSaveAccessToken, SaveAccessToken};

use common::RedactedSecret;

use std::fs;

use serde_json::{Value, json};
use tempfile::TempDir;

/// **VALUE**: Verifies values written with `set` are read back, alongside earlier keys.
///
/// **BUG THIS CATCHES**: Would catch a write that replaces the whole file with only
/// the latest key, wiping everything stored before.
#[tokio::test]
async fn given_two_sets_when_reading_back_then_both_values_are_present() {
    // GIVEN: Storage in a nested, not-yet-existing directory
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("nested").join("storage.json"));

    // WHEN: Setting two keys
    storage.set("theme", json!("dark")).await.unwrap();
    storage.set("accessToken", json!("xyz")).await.unwrap();

    // THEN: Both are readable and no temp file is left behind
    assert_eq!(storage.get("theme").await.unwrap(), Some(json!("dark")));
    assert_eq!(storage.get("accessToken").await.unwrap(), Some(json!("xyz")));
    assert!(!dir.path().join("nested").join("storage.json.tmp").exists());
}

#[tokio::test]
async fn given_missing_file_when_getting_then_returns_none() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("storage.json"));

    assert_eq!(storage.get("accessToken").await.unwrap(), None);
}

#[tokio::test]
async fn given_corrupted_file_when_setting_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "{ not json").unwrap();
    let storage = FileStorage::new(&path);

    let result = storage.set("accessToken", json!("xyz")).await;

    assert!(matches!(result, Err(StorageError::ParseError { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json", "File must be left untouched");
}

/// **VALUE**: Verifies the save-token usecase lands the raw token in the file.
#[tokio::test]
async fn given_file_storage_when_saving_access_token_then_file_holds_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let sut = LocalSaveAccessToken::new(FileStorage::new(&path));

    sut.save(&RedactedSecret::new("token-123")).await.unwrap();

    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[ACCESS_TOKEN_KEY], json!("token-123"));
}
