//! Key-Value Backend Implementations
//!
//! ## Backend Selection Guide
//!
//! - **Development/Testing**: `NullBackend` disables caching, `MokaBackend`
//!   gives a throwaway store
//! - **Applications**: `FileBackend` keeps cached values across restarts

#[cfg(feature = "backend-file")]
pub mod file;
#[cfg(feature = "backend-moka")]
pub mod moka;
pub mod null;

#[cfg(feature = "backend-file")]
pub use file::FileBackend;
#[cfg(feature = "backend-moka")]
pub use moka::MokaBackend;
pub use null::NullBackend;

use flowcache_domain::error::{Error, Result};
use flowcache_domain::value_objects::{StorageKind, StoredValue};

/// Text content of an entry read through the string path
pub(crate) fn expect_text(name: &str, stored: Option<StoredValue>) -> Result<Option<String>> {
    match stored {
        None => Ok(None),
        Some(StoredValue::Text(text)) => Ok(Some(text)),
        Some(other) => Err(Error::type_mismatch(name, StorageKind::Text, other.kind())),
    }
}

/// Integer content of an entry read through the integer path
pub(crate) fn expect_integer(name: &str, stored: Option<StoredValue>, default: i64) -> Result<i64> {
    match stored {
        None => Ok(default),
        Some(StoredValue::Integer(value)) => Ok(value),
        Some(other) => Err(Error::type_mismatch(
            name,
            StorageKind::Integer,
            other.kind(),
        )),
    }
}
