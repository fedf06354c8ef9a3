//! Cache Keys
//!
//! A cache key names one slot in the store and owns the codec between the
//! slot's value type and its [`StoredValue`]. Keys are cheap value objects:
//! build one wherever the slot is used.
//!
//! | Key | Value | Storage |
//! |-----|-------|---------|
//! | [`StringKey`] | `String` | text, identity codec |
//! | [`IntegerKey`] | `i64` | integer, sentinel-encoded absence |
//! | [`JsonKey<T>`] | any serde type | text, `serde_json` codec |
//!
//! A name must always be used with the same key type. Reading a slot
//! through a key of another kind yields a miss, never a panic.

mod integer;
mod json;
mod string;

pub use integer::IntegerKey;
pub use json::JsonKey;
pub use string::StringKey;

use crate::error::Result;
use crate::value_objects::{StorageKind, StoredValue};
use std::any::TypeId;

/// Cache Key capability
///
/// `decode` is total: anything that cannot be turned back into a value is
/// reported as `None` so read paths never fail.
pub trait CacheKey: Send + Sync + std::fmt::Debug {
    /// Type of the cached value
    type Value: Send + Sync + 'static;

    /// Slot name, unique within the store
    fn name(&self) -> &str;

    /// Backend storage this key reads and writes
    fn storage_kind(&self) -> StorageKind;

    /// Encode a value for storage
    fn encode(&self, value: &Self::Value) -> Result<StoredValue>;

    /// Decode a stored value, `None` if it does not represent a value
    fn decode(&self, stored: StoredValue) -> Option<Self::Value>;

    /// Whether `candidate` is this key's value type
    fn type_matches(&self, candidate: TypeId) -> bool {
        TypeId::of::<Self::Value>() == candidate
    }

    /// Human-readable name of the value type, for diagnostics
    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<Self::Value>()
    }
}
