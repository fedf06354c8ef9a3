//! # flowcache
//!
//! Typed persistent caching overlaid on asynchronous value streams.
//!
//! A producer of values (a network fetch, a sensor, a database query) is
//! wrapped so that consumers see a previously stored value before the live
//! one arrives, or only the stored value, and fresh values are written back
//! for the next session.
//!
//! ## Example
//!
//! ```ignore
//! use flowcache::{AppConfig, CacheOptions, CacheStreamExt, StringKey, init_global};
//!
//! init_global(&AppConfig::default()).await?;
//!
//! let headlines = fetch_headlines().cached(StringKey::new("headlines"), CacheOptions::if_have());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - keys, stored values, the backend port and the error type
//! - `application` - the cache store, strategies and the stream decorator
//! - `infrastructure` - configuration, logging and store bootstrap
//! - `providers` - backend implementations (memory, file, null)

/// Domain layer - keys, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use flowcache_domain::*;
}

/// Application layer - store, strategies and decorator
pub mod application {
    pub use flowcache_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use flowcache_infrastructure::*;
}

/// Backend implementations
pub mod providers {
    pub use flowcache_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{
    CacheStore, CacheStrategy, CacheStreamExt, CachedStream, GetIfAvailable, GetOnly, cache,
    cache_in,
};
pub use infrastructure::logging::init_logging;
pub use infrastructure::{AppConfig, BackendConfig, BackendProvider, ConfigLoader, create_backend, init_global};
pub use providers::{FileBackend, MokaBackend, NullBackend};
