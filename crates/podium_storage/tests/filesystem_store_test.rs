//! Tests for the filesystem key-value backend.

use podium_error::{PodiumErrorKind, StorageErrorKind};
use podium_interface::KeyValueStore;
use podium_storage::FileSystemStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_set_and_get() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert_eq!(store.get("podium.outline").await.unwrap(), None);

    store.set("podium.outline", "{\"a\":1}").await.unwrap();
    assert_eq!(
        store.get("podium.outline").await.unwrap().as_deref(),
        Some("{\"a\":1}")
    );
    assert!(temp_dir.path().join("podium.outline.json").exists());
}

#[tokio::test]
async fn test_set_replaces_whole_value() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("key", "a much longer first value").await.unwrap();
    store.set("key", "short").await.unwrap();
    assert_eq!(store.get("key").await.unwrap().as_deref(), Some("short"));

    // No temp files are left behind
    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("key", "value").await.unwrap();
    store.remove("key").await.unwrap();
    store.remove("key").await.unwrap();
    assert_eq!(store.get("key").await.unwrap(), None);
}

#[tokio::test]
async fn test_creates_nested_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let store = FileSystemStore::new(&nested).unwrap();

    store.set("key", "value").await.unwrap();
    assert!(nested.join("key.json").exists());
    assert_eq!(store.base_path(), nested.as_path());
}

#[tokio::test]
async fn test_rejects_unsafe_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    for key in ["", "../escape", "a/b", ".hidden", "spaces here"] {
        let err = store.set(key, "value").await.unwrap_err();
        assert!(
            matches!(
                err.kind(),
                PodiumErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::InvalidKey(_))
            ),
            "key {:?} should be rejected",
            key
        );
    }
}
