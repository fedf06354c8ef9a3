//! Moka in-memory backend
//!
//! Concurrent in-process key-value store built on Moka. Entries live until
//! overwritten or cleared; nothing is evicted and nothing survives a restart.
//!
//! ## Example
//!
//! ```ignore
//! use flowcache_providers::MokaBackend;
//!
//! let backend = MokaBackend::new();
//! backend.set_string("greeting", "hello").await?;
//! ```

use super::{expect_integer, expect_text};
use async_trait::async_trait;
use flowcache_domain::error::Result;
use flowcache_domain::ports::KeyValueBackend;
use flowcache_domain::value_objects::StoredValue;
use moka::future::Cache;
use tracing::debug;

/// Moka-based in-memory backend
#[derive(Clone)]
pub struct MokaBackend {
    cache: Cache<String, StoredValue>,
}

impl Default for MokaBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }

    /// Number of entries currently held
    pub async fn len(&self) -> usize {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX)
    }

    /// Whether the backend holds no entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl KeyValueBackend for MokaBackend {
    async fn get_string(&self, name: &str) -> Result<Option<String>> {
        expect_text(name, self.cache.get(name).await)
    }

    async fn set_string(&self, name: &str, value: &str) -> Result<()> {
        self.cache
            .insert(name.to_string(), StoredValue::Text(value.to_string()))
            .await;
        Ok(())
    }

    async fn get_int(&self, name: &str, default: i64) -> Result<i64> {
        expect_integer(name, self.cache.get(name).await, default)
    }

    async fn set_int(&self, name: &str, value: i64) -> Result<()> {
        self.cache
            .insert(name.to_string(), StoredValue::Integer(value))
            .await;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        debug!("Cleared moka backend");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaBackend")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
