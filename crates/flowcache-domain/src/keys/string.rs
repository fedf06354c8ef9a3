use super::CacheKey;
use crate::error::Result;
use crate::value_objects::{StorageKind, StoredValue};

/// Key for a plain string slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringKey {
    name: String,
}

impl StringKey {
    /// Create a key for the slot `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl CacheKey for StringKey {
    type Value = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Text
    }

    fn encode(&self, value: &String) -> Result<StoredValue> {
        Ok(StoredValue::Text(value.clone()))
    }

    fn decode(&self, stored: StoredValue) -> Option<String> {
        match stored {
            StoredValue::Text(text) => Some(text),
            StoredValue::Integer(_) => None,
        }
    }
}
