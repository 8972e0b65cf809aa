//! Integration tests for [`storage::FileStore`].
//!
//! Covers the on-disk layout (`<id>.json`, pretty-printed), round-trips,
//! list failure on malformed content, and persistence across store instances.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use storage::{FileStore, MessageRecord, MessageRepository, RecordStore, StorageError};

fn payload(fields: Value) -> Map<String, Value> {
    fields.as_object().expect("payload must be an object").clone()
}

/// **Test: Stored record reads back field-for-field identical.**
///
/// **Setup:** FileStore in a temp directory; one record with extra fields.
/// **Action:** `put(&record)` then `get(&record.id)`.
/// **Expected:** Returns `Some(record)` equal to the one written.
#[tokio::test]
async fn test_put_get_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path())
        .await
        .expect("Failed to create store");

    let record = MessageRecord::new(payload(json!({ "text": "hi", "author": "ana" })));
    store.put(&record).await.expect("Failed to put record");

    let loaded = store
        .get(&record.id)
        .await
        .expect("Failed to get record")
        .expect("Record missing");

    assert_eq!(loaded, record);
}

/// **Test: Records land at `<id>.json`, pretty-printed.**
///
/// **Setup:** FileStore in a temp directory; one record.
/// **Action:** `put(&record)`, then read the file directly.
/// **Expected:** File exists at `<id>.json`; content is indented JSON
/// containing the server-assigned fields.
#[tokio::test]
async fn test_file_layout_and_pretty_printing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path())
        .await
        .expect("Failed to create store");

    let record = MessageRecord::new(payload(json!({ "text": "hi" })));
    store.put(&record).await.expect("Failed to put record");

    let path = dir.path().join(format!("{}.json", record.id));
    let content = std::fs::read_to_string(&path).expect("Record file missing");

    assert!(content.starts_with("{\n  \""));
    let value: Value = serde_json::from_str(&content).expect("File is not valid JSON");
    assert_eq!(value.get("id"), Some(&json!(record.id)));
    assert_eq!(value.get("read"), Some(&json!(false)));
    assert_eq!(value.get("text"), Some(&json!("hi")));
}

/// **Test: Get returns None when no file exists for the id.**
///
/// **Setup:** Empty temp directory.
/// **Action:** `get("missing")`.
/// **Expected:** Returns `None`.
#[tokio::test]
async fn test_get_missing_is_none() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path())
        .await
        .expect("Failed to create store");

    let loaded = store.get("missing").await.expect("Failed to get record");

    assert!(loaded.is_none());
}

/// **Test: List fails on the first malformed file, with no partial result.**
///
/// **Setup:** One valid record plus one `.json` file with garbage content.
/// **Action:** `list()`.
/// **Expected:** Returns `StorageError::Read`.
#[tokio::test]
async fn test_list_aborts_on_malformed_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path())
        .await
        .expect("Failed to create store");

    let record = MessageRecord::new(payload(json!({ "text": "hi" })));
    store.put(&record).await.expect("Failed to put record");
    std::fs::write(dir.path().join("broken.json"), "not json").expect("Failed to write file");

    let err = store.list().await.expect_err("list must fail");

    assert!(matches!(err, StorageError::Read(_)));
}

/// **Test: List ignores files without a `.json` extension.**
///
/// **Setup:** One valid record plus a stray non-JSON file.
/// **Action:** `list()`.
/// **Expected:** Returns only the record.
#[tokio::test]
async fn test_list_skips_non_json_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path())
        .await
        .expect("Failed to create store");

    let record = MessageRecord::new(payload(json!({ "text": "hi" })));
    store.put(&record).await.expect("Failed to put record");
    std::fs::write(dir.path().join("README"), "notes").expect("Failed to write file");

    let listed = store.list().await.expect("Failed to list records");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);
}

/// **Test: A mark-read survives reopening the directory with a new store.**
///
/// **Setup:** Repository over a FileStore; one created message marked read.
/// **Action:** Open a second FileStore over the same directory and `get`.
/// **Expected:** The reloaded record has `read == true`.
#[tokio::test]
async fn test_mark_read_persists_across_instances() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path())
        .await
        .expect("Failed to create store");
    let repo = MessageRepository::new(Arc::new(store));

    let record = repo
        .create(payload(json!({ "text": "hi" })))
        .await
        .expect("Failed to create message");
    repo.mark_read(&record.id)
        .await
        .expect("Failed to mark read");

    let reopened = FileStore::new(dir.path())
        .await
        .expect("Failed to reopen store");
    let loaded = reopened
        .get(&record.id)
        .await
        .expect("Failed to get record")
        .expect("Record missing");

    assert!(loaded.read);
}
