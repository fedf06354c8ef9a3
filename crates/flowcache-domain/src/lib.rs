//! Domain Layer - flowcache
//!
//! Core types of the caching subsystem. Nothing here performs I/O: keys
//! describe how a typed value maps onto a [`StoredValue`], and the
//! [`KeyValueBackend`] port describes the storage medium the store talks to.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`keys`] | `CacheKey` capability and the String, Integer and JSON variants |
//! | [`ports`] | `KeyValueBackend` port implemented by `flowcache-providers` |
//! | [`value_objects`] | `StoredValue`, `CacheStats`, strategy selection |
//! | [`error`] | Domain error type and `Result` alias |

pub mod constants;
pub mod error;
pub mod keys;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use keys::{CacheKey, IntegerKey, JsonKey, StringKey};
pub use ports::KeyValueBackend;
pub use value_objects::{CacheOptions, CacheStats, CacheStrategyType, StorageKind, StoredValue};
