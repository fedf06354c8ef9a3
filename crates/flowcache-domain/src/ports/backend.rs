//! Key-Value Backend Port
//!
//! Port for the persistent medium behind the cache store. The store only
//! ever needs string and integer slots addressed by name, plus a way to wipe
//! everything.
//!
//! ## Implementations
//!
//! Backends live in `flowcache-providers`:
//!
//! - **Moka**: in-process memory, lost on exit
//! - **File**: JSON document on disk, survives restarts
//! - **Null**: stores nothing, for tests and disabling the cache

use crate::error::Result;
use async_trait::async_trait;

/// Key-Value Backend Port
///
/// A name holds at most one entry, either a string or an integer. Reading
/// an entry through the other kind is reported as
/// [`crate::Error::TypeMismatch`].
///
/// # Example
///
/// ```ignore
/// use flowcache_domain::ports::KeyValueBackend;
///
/// backend.set_int("launch_count", 3).await?;
/// assert_eq!(backend.get_int("launch_count", -1).await?, 3);
/// assert_eq!(backend.get_int("never_written", -1).await?, -1);
/// ```
#[async_trait]
pub trait KeyValueBackend: Send + Sync + std::fmt::Debug {
    /// Read a string entry, `None` when nothing is stored under `name`
    async fn get_string(&self, name: &str) -> Result<Option<String>>;

    /// Write a string entry, replacing whatever was stored under `name`
    async fn set_string(&self, name: &str, value: &str) -> Result<()>;

    /// Read an integer entry, returning `default` when nothing is stored
    async fn get_int(&self, name: &str, default: i64) -> Result<i64>;

    /// Write an integer entry, replacing whatever was stored under `name`
    async fn set_int(&self, name: &str, value: i64) -> Result<()>;

    /// Remove every entry
    async fn clear(&self) -> Result<()>;

    /// Get the name/identifier of this backend implementation
    ///
    /// # Returns
    /// A string identifier for the backend (e.g., "moka", "file", "null")
    fn provider_name(&self) -> &str;
}
