//! Cache Store
//!
//! Typed access to a [`KeyValueBackend`]. Keys decide how a value is
//! encoded; the store performs the matching backend call and keeps hit,
//! miss and write counters.
//!
//! ## Lifecycle
//!
//! There is one process-wide store. It starts uninitialized and becomes
//! usable once [`CacheStore::initialize`] binds it to a backend. Using
//! [`CacheStore::global`] before that is a programming error and panics.
//! Independent stores can still be built with [`CacheStore::new`] for scoped
//! use.
//!
//! Reads never fail: an absent entry, an undecodable entry and a failed
//! backend read all come back as `None`. Concurrent writes to one key are
//! last-write-wins at the backend.

use flowcache_domain::constants::INTEGER_ABSENT_SENTINEL;
use flowcache_domain::error::{Error, Result};
use flowcache_domain::keys::CacheKey;
use flowcache_domain::ports::KeyValueBackend;
use flowcache_domain::value_objects::{CacheStats, StorageKind, StoredValue};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

static GLOBAL_STORE: OnceLock<CacheStore> = OnceLock::new();

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
}

/// Typed cache store over a shared backend
///
/// Cloning is cheap; clones share the backend and the counters.
#[derive(Clone)]
pub struct CacheStore {
    backend: Arc<dyn KeyValueBackend>,
    counters: Arc<Counters>,
}

// Construction and lifecycle
impl CacheStore {
    /// Create a store owning `backend`
    pub fn new<B: KeyValueBackend + 'static>(backend: B) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    /// Create a store over a shared backend
    pub fn from_arc(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Bind the process-wide store to `backend`
    ///
    /// Must be called once, before any use of [`CacheStore::global`]. A
    /// second call leaves the existing binding in place and returns
    /// [`Error::AlreadyInitialized`].
    pub fn initialize(backend: Arc<dyn KeyValueBackend>) -> Result<&'static CacheStore> {
        let provider = backend.provider_name().to_string();
        let mut fresh = false;
        let store = GLOBAL_STORE.get_or_init(|| {
            fresh = true;
            Self::from_arc(backend)
        });

        if fresh {
            info!(backend = %provider, "Cache store initialized");
            Ok(store)
        } else {
            Err(Error::AlreadyInitialized)
        }
    }

    /// The process-wide store
    ///
    /// # Panics
    ///
    /// Panics if [`CacheStore::initialize`] has not been called.
    pub fn global() -> &'static CacheStore {
        match GLOBAL_STORE.get() {
            Some(store) => store,
            None => panic!("CacheStore::global() called before CacheStore::initialize()"),
        }
    }

    /// The process-wide store, if initialized
    pub fn try_global() -> Option<&'static CacheStore> {
        GLOBAL_STORE.get()
    }

    /// Whether the process-wide store has been initialized
    pub fn is_initialized() -> bool {
        GLOBAL_STORE.get().is_some()
    }

    /// Name of the backend behind this store
    pub fn backend_name(&self) -> &str {
        self.backend.provider_name()
    }
}

// Cache operations
impl CacheStore {
    /// Read the value cached under `key`
    pub async fn get<K: CacheKey>(&self, key: &K) -> Option<K::Value> {
        let value = match self.read_raw(key.name(), key.storage_kind()).await {
            Ok(Some(stored)) => key.decode(stored),
            Ok(None) => None,
            Err(e) => {
                warn!(key = key.name(), "Cache read failed, treating as miss: {}", e);
                None
            }
        };

        if value.is_some() {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = key.name(), "Cache hit");
        } else {
            self.counters.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = key.name(), "Cache miss");
        }
        value
    }

    /// Write `value` under `key`, replacing any previous value
    pub async fn set<K: CacheKey>(&self, key: &K, value: &K::Value) -> Result<()> {
        match key.encode(value)? {
            StoredValue::Text(text) => self.backend.set_string(key.name(), &text).await?,
            StoredValue::Integer(number) => self.backend.set_int(key.name(), number).await?,
        }
        self.counters.writes.fetch_add(1, Ordering::Relaxed);
        debug!(key = key.name(), "Cache write");
        Ok(())
    }

    /// Remove every cached value; the store stays usable
    pub async fn clear_all(&self) -> Result<()> {
        self.backend.clear().await?;
        info!(backend = self.backend_name(), "Cache cleared");
        Ok(())
    }

    /// Snapshot of the hit, miss and write counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            writes: self.counters.writes.load(Ordering::Relaxed),
        }
    }

    async fn read_raw(&self, name: &str, kind: StorageKind) -> Result<Option<StoredValue>> {
        match kind {
            StorageKind::Text => Ok(self.backend.get_string(name).await?.map(StoredValue::Text)),
            StorageKind::Integer => {
                let number = self
                    .backend
                    .get_int(name, INTEGER_ABSENT_SENTINEL)
                    .await?;
                Ok(Some(StoredValue::Integer(number)))
            }
        }
    }
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("backend", &self.backend.provider_name())
            .field("stats", &self.stats())
            .finish()
    }
}
