//! Value objects shared by every layer

pub mod stats;
pub mod stored_value;
pub mod strategy;

pub use stats::CacheStats;
pub use stored_value::{StorageKind, StoredValue};
pub use strategy::{CacheOptions, CacheStrategyType};
