use super::CacheKey;
use crate::constants::INTEGER_ABSENT_SENTINEL;
use crate::error::Result;
use crate::value_objects::{StorageKind, StoredValue};

/// Key for an integer slot
///
/// Integers go through the backend's native integer storage, whose read
/// needs a default. [`INTEGER_ABSENT_SENTINEL`] is that default, so a read
/// yielding it is a miss.
///
/// # Known limitation
///
/// `i64::MIN` cannot be cached: it is written like any other value but reads
/// back as absent.
///
/// ```
/// use flowcache_domain::{CacheKey, IntegerKey, StoredValue};
///
/// let key = IntegerKey::new("launch_count");
/// assert_eq!(key.decode(StoredValue::Integer(7)), Some(7));
/// assert_eq!(key.decode(StoredValue::Integer(i64::MIN)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerKey {
    name: String,
}

impl IntegerKey {
    /// Create a key for the slot `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Default passed to the backend integer read
    pub const fn sentinel() -> i64 {
        INTEGER_ABSENT_SENTINEL
    }
}

impl CacheKey for IntegerKey {
    type Value = i64;

    fn name(&self) -> &str {
        &self.name
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Integer
    }

    fn encode(&self, value: &i64) -> Result<StoredValue> {
        Ok(StoredValue::Integer(*value))
    }

    fn decode(&self, stored: StoredValue) -> Option<i64> {
        match stored {
            StoredValue::Integer(INTEGER_ABSENT_SENTINEL) | StoredValue::Text(_) => None,
            StoredValue::Integer(value) => Some(value),
        }
    }
}
