//! File Backend Tests

use flowcache_domain::Error;
use flowcache_providers::{FileBackend, KeyValueBackend};
use tempfile::TempDir;

#[tokio::test]
async fn test_file_backend_starts_empty() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path().join("store.json"))
        .await
        .unwrap();

    assert!(backend.is_empty().await);
    assert!(backend.get_string("missing").await.unwrap().is_none());
    assert_eq!(backend.get_int("missing", 5).await.unwrap(), 5);
    assert_eq!(backend.provider_name(), "file");
}

#[tokio::test]
async fn test_file_backend_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    {
        let backend = FileBackend::open(&path).await.unwrap();
        backend.set_string("greeting", "hello").await.unwrap();
        backend.set_int("count", 41).await.unwrap();
        backend.set_int("count", 42).await.unwrap();
    }

    let reopened = FileBackend::open(&path).await.unwrap();
    assert_eq!(reopened.path(), path.as_path());
    assert_eq!(reopened.len().await, 2);
    assert_eq!(
        reopened.get_string("greeting").await.unwrap(),
        Some("hello".to_string())
    );
    assert_eq!(reopened.get_int("count", 0).await.unwrap(), 42);
}

#[tokio::test]
async fn test_file_backend_clear_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let backend = FileBackend::open(&path).await.unwrap();
    backend.set_string("a", "1").await.unwrap();
    backend.clear().await.unwrap();
    drop(backend);

    let reopened = FileBackend::open(&path).await.unwrap();
    assert!(reopened.is_empty().await);
}

#[tokio::test]
async fn test_file_backend_document_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let backend = FileBackend::open(&path).await.unwrap();
    backend.set_int("count", 3).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["count"]["kind"], "integer");
    assert_eq!(raw["count"]["value"], 3);
}

#[tokio::test]
async fn test_file_backend_rejects_corrupt_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = FileBackend::open(&path).await.unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[tokio::test]
async fn test_file_backend_type_mismatch() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::open(dir.path().join("store.json"))
        .await
        .unwrap();

    backend.set_int("slot", 1).await.unwrap();
    assert!(matches!(
        backend.get_string("slot").await,
        Err(Error::TypeMismatch { .. })
    ));
}

#[tokio::test]
async fn test_file_backend_failed_write_leaves_memory_unchanged() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    let backend = FileBackend::open(sub.join("store.json")).await.unwrap();
    backend.set_string("a", "1").await.unwrap();

    // Parent directory replaced by a regular file: every flush now fails
    std::fs::remove_dir_all(&sub).unwrap();
    std::fs::write(&sub, "").unwrap();

    assert!(backend.set_string("k", "v").await.is_err());
    assert!(backend.set_int("n", 1).await.is_err());
    assert_eq!(backend.get_string("k").await.unwrap(), None);
    assert_eq!(backend.get_int("n", -1).await.unwrap(), -1);

    assert!(backend.clear().await.is_err());
    assert_eq!(backend.len().await, 1);
    assert_eq!(
        backend.get_string("a").await.unwrap(),
        Some("1".to_string())
    );
}

#[tokio::test]
async fn test_file_backend_temp_file_keeps_full_name() {
    let dir = TempDir::new().unwrap();
    // Occupies the name a bare extension swap would pick for the temp file
    std::fs::create_dir(dir.path().join("store.tmp")).unwrap();

    let json = FileBackend::open(dir.path().join("store.json")).await.unwrap();
    let toml = FileBackend::open(dir.path().join("store.toml")).await.unwrap();
    json.set_string("from", "json").await.unwrap();
    toml.set_string("from", "toml").await.unwrap();

    let json = FileBackend::open(dir.path().join("store.json")).await.unwrap();
    let toml = FileBackend::open(dir.path().join("store.toml")).await.unwrap();
    assert_eq!(json.get_string("from").await.unwrap(), Some("json".to_string()));
    assert_eq!(toml.get_string("from").await.unwrap(), Some("toml".to_string()));
    assert!(!dir.path().join("store.json.tmp").exists());
    assert!(!dir.path().join("store.toml.tmp").exists());
}

#[tokio::test]
async fn test_file_backend_document_named_tmp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.tmp");

    let backend = FileBackend::open(&path).await.unwrap();
    backend.set_int("count", 9).await.unwrap();

    let reopened = FileBackend::open(&path).await.unwrap();
    assert_eq!(reopened.get_int("count", 0).await.unwrap(), 9);
    assert!(!dir.path().join("cache.tmp.tmp").exists());
}
