//! File-backed persistent backend
//!
//! Keeps every entry in memory and writes the whole set through to a JSON
//! document after each mutation. The document is replaced atomically (write
//! to a sibling temp file, then rename), so a crash leaves either the old or
//! the new contents on disk.
//!
//! ## Document format
//!
//! ```json
//! {
//!   "greeting": { "kind": "text", "value": "hello" },
//!   "launch_count": { "kind": "integer", "value": 3 }
//! }
//! ```

use super::{expect_integer, expect_text};
use async_trait::async_trait;
use flowcache_domain::error::{Error, Result};
use flowcache_domain::ports::KeyValueBackend;
use flowcache_domain::value_objects::StoredValue;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

type Entries = BTreeMap<String, StoredValue>;

/// Persistent backend stored as a JSON document
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    tmp_path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileBackend {
    /// Open the document at `path`, starting empty if it does not exist yet
    ///
    /// Fails if the file exists but is not a valid document.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => Entries::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Entries::new(),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read cache file {}", path.display()),
                    e,
                ));
            }
        };

        info!(
            path = %path.display(),
            entries = entries.len(),
            "Opened file cache backend"
        );
        Ok(Self {
            tmp_path: sibling_tmp_path(&path),
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries currently held
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the backend holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    async fn insert(&self, name: &str, value: StoredValue) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.insert(name.to_string(), value);
        self.write_through(&next).await?;
        *entries = next;
        Ok(())
    }

    // Caller holds the lock so writes hit the disk in mutation order.
    // Memory is only updated once the document is on disk.
    async fn write_through(&self, entries: &Entries) -> Result<()> {
        let json = serde_json::to_vec_pretty(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create cache directory {}", parent.display()),
                    e,
                )
            })?;
        }

        tokio::fs::write(&self.tmp_path, json).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to write cache file {}", self.tmp_path.display()),
                e,
            )
        })?;
        tokio::fs::rename(&self.tmp_path, &self.path).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to replace cache file {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), entries = entries.len(), "Flushed cache file");
        Ok(())
    }
}

/// `store.json` -> `store.json.tmp`, next to the document
fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl KeyValueBackend for FileBackend {
    async fn get_string(&self, name: &str) -> Result<Option<String>> {
        let stored = self.entries.lock().await.get(name).cloned();
        expect_text(name, stored)
    }

    async fn set_string(&self, name: &str, value: &str) -> Result<()> {
        self.insert(name, StoredValue::Text(value.to_string())).await
    }

    async fn get_int(&self, name: &str, default: i64) -> Result<i64> {
        let stored = self.entries.lock().await.get(name).cloned();
        expect_integer(name, stored, default)
    }

    async fn set_int(&self, name: &str, value: i64) -> Result<()> {
        self.insert(name, StoredValue::Integer(value)).await
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().await;
        self.write_through(&Entries::new()).await?;
        entries.clear();
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "file"
    }
}
