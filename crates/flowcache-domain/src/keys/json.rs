use super::CacheKey;
use crate::error::Result;
use crate::value_objects::{StorageKind, StoredValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use tracing::warn;

/// Key for a structured slot serialized as JSON
///
/// The value is serialized with `serde_json` and stored through the string
/// path. Text that no longer deserializes into `T` (corrupted, or written by
/// an older schema) reads back as a miss.
///
/// ```
/// use flowcache_domain::{CacheKey, JsonKey, StoredValue};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Profile {
///     name: String,
/// }
///
/// let key = JsonKey::<Profile>::new("profile");
/// let stored = key.encode(&Profile { name: "ada".into() }).unwrap();
/// assert_eq!(key.decode(stored), Some(Profile { name: "ada".into() }));
/// assert_eq!(key.decode(StoredValue::Text("{".into())), None);
/// ```
pub struct JsonKey<T> {
    name: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> JsonKey<T> {
    /// Create a key for the slot `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            _value: PhantomData,
        }
    }
}

impl<T> Clone for JsonKey<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> fmt::Debug for JsonKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonKey")
            .field("name", &self.name)
            .field("value_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> CacheKey for JsonKey<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    type Value = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Text
    }

    fn encode(&self, value: &T) -> Result<StoredValue> {
        Ok(StoredValue::Text(serde_json::to_string(value)?))
    }

    fn decode(&self, stored: StoredValue) -> Option<T> {
        let StoredValue::Text(json) = stored else {
            return None;
        };
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    key = %self.name,
                    value_type = std::any::type_name::<T>(),
                    "Discarding undecodable cached value: {}",
                    e
                );
                None
            }
        }
    }
}
