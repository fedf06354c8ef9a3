//! Application Layer - flowcache
//!
//! Overlays a typed cache on an asynchronous value stream.
//!
//! ## Architecture
//!
//! - [`store`]: the process-wide [`CacheStore`], reading and writing typed
//!   values through cache keys and a `KeyValueBackend`
//! - [`strategy`]: how cached and live values are combined
//!   ([`GetIfAvailable`], [`GetOnly`])
//! - [`decorator`]: the [`cache`] entry point and [`CacheStreamExt`]
//!
//! ## Example
//!
//! ```ignore
//! use flowcache_application::{cache, CacheOptions};
//! use flowcache_domain::StringKey;
//!
//! let decorated = cache(fetch_headlines(), StringKey::new("headlines"), CacheOptions::default());
//! ```

pub mod decorator;
pub mod store;
pub mod strategy;

pub use decorator::{CacheStreamExt, cache, cache_in};
pub use flowcache_domain::{CacheOptions, CacheStrategyType};
pub use store::CacheStore;
pub use strategy::{CacheStrategy, CachedStream, GetIfAvailable, GetOnly};
