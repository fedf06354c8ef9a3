//! Store bootstrap
//!
//! Builds the configured backend and binds the process-wide cache store.

use crate::config::{AppConfig, BackendConfig, BackendProvider};
use flowcache_application::CacheStore;
use flowcache_domain::error::{Error, Result};
use flowcache_domain::ports::KeyValueBackend;
use flowcache_providers::{FileBackend, MokaBackend, NullBackend};
use std::sync::Arc;
use tracing::info;

/// Create the backend described by `config`
///
/// The file provider loads any existing store document before returning.
pub async fn create_backend(config: &BackendConfig) -> Result<Arc<dyn KeyValueBackend>> {
    let backend: Arc<dyn KeyValueBackend> = match config.provider {
        BackendProvider::Memory => Arc::new(MokaBackend::new()),
        BackendProvider::File => {
            let path = config.resolved_path().ok_or_else(|| {
                Error::configuration("File backend needs backend.path: no local data directory")
            })?;
            Arc::new(FileBackend::open(path).await?)
        }
        BackendProvider::Null => Arc::new(NullBackend::new()),
    };

    info!(provider = %config.provider, backend = backend.provider_name(), "Backend created");
    Ok(backend)
}

/// Initialize the process-wide cache store from configuration
///
/// Fails with [`Error::AlreadyInitialized`] when called a second time.
pub async fn init_global(config: &AppConfig) -> Result<&'static CacheStore> {
    let backend = create_backend(&config.backend).await?;
    CacheStore::initialize(backend)
}
