//! Cache Strategies
//!
//! A strategy turns a live stream into a decorated stream that mixes in the
//! value cached under one key. Strategies are built for a single decoration
//! and consumed by [`CacheStrategy::execute`].
//!
//! | Strategy | Emits | Live values |
//! |----------|-------|-------------|
//! | [`GetIfAvailable`] | cached value (if any), then every live value | forwarded, optionally persisted |
//! | [`GetOnly`] | cached value (if any) | drained, optionally persisted |
//!
//! Both read the cache once, on the first poll, and write at most once per
//! live value. A live `Err` is forwarded unchanged and ends the stream.
//! Dropping the decorated stream drops the live stream with it.

mod if_available;
mod only;

pub use if_available::GetIfAvailable;
pub use only::GetOnly;

use crate::store::CacheStore;
use flowcache_domain::keys::CacheKey;
use futures::Stream;
use std::pin::Pin;
use tracing::warn;

/// Boxed decorated stream
///
/// Yields the same `Result` items as the live stream it wraps.
pub type CachedStream<T, E> = Pin<Box<dyn Stream<Item = Result<T, E>> + Send + 'static>>;

/// Cache strategy contract
pub trait CacheStrategy<K: CacheKey> {
    /// Decorate `live`, returning a fresh stream for a single consumer
    fn execute<S, E>(self, live: S) -> CachedStream<K::Value, E>
    where
        S: Stream<Item = Result<K::Value, E>> + Send + 'static,
        E: Send + 'static;
}

/// Progress of a decorated stream
pub(crate) enum Phase<S> {
    /// Cache not read yet
    Start(Pin<Box<S>>),
    /// Consuming the live stream
    Live(Pin<Box<S>>),
    /// Finished; the live stream has been dropped
    Done,
}

/// Write a live value back; failures are logged and the stream carries on
pub(crate) async fn persist<K: CacheKey>(store: &CacheStore, key: &K, value: &K::Value) {
    if let Err(e) = store.set(key, value).await {
        warn!(key = key.name(), "Failed to persist live value: {}", e);
    }
}
