//! Null backend for testing
//!
//! A backend that doesn't store anything. Useful for testing and disabling
//! caching: every decorated stream behaves as if the cache were empty.

use async_trait::async_trait;
use flowcache_domain::constants::NULL_BACKEND_NAME;
use flowcache_domain::error::Result;
use flowcache_domain::ports::KeyValueBackend;

/// Null backend that doesn't store anything
///
/// Reads always miss and writes are accepted without storing the data.
///
/// # Example
///
/// ```rust
/// use flowcache_providers::NullBackend;
///
/// let backend = NullBackend::new();
/// // All operations succeed but nothing is stored
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NullBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyValueBackend for NullBackend {
    async fn get_string(&self, _name: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_string(&self, _name: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    async fn get_int(&self, _name: &str, default: i64) -> Result<i64> {
        Ok(default)
    }

    async fn set_int(&self, _name: &str, _value: i64) -> Result<()> {
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        NULL_BACKEND_NAME
    }
}
