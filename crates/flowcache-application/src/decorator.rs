//! Stream decoration entry point
//!
//! ```ignore
//! use flowcache_application::{CacheOptions, CacheStreamExt};
//! use flowcache_domain::JsonKey;
//!
//! // Cached forecast first, then fresh ones as they arrive.
//! let forecasts = weather_updates().cached(JsonKey::<Forecast>::new("forecast"), CacheOptions::default());
//!
//! // Only last session's value; the live stream refreshes the cache for next time.
//! let snapshot = weather_updates().cached(JsonKey::<Forecast>::new("forecast"), CacheOptions::only());
//! ```

use crate::store::CacheStore;
use crate::strategy::{CacheStrategy, CachedStream, GetIfAvailable, GetOnly};
use flowcache_domain::keys::CacheKey;
use flowcache_domain::value_objects::{CacheOptions, CacheStrategyType};
use futures::Stream;
use tracing::debug;

/// Decorate `live` with the cached value under `key`, using the global store
///
/// # Panics
///
/// Panics if the global [`CacheStore`] has not been initialized.
pub fn cache<K, S, E>(live: S, key: K, options: CacheOptions) -> CachedStream<K::Value, E>
where
    K: CacheKey + 'static,
    S: Stream<Item = Result<K::Value, E>> + Send + 'static,
    E: Send + 'static,
{
    cache_in(CacheStore::global().clone(), live, key, options)
}

/// Decorate `live` with the cached value under `key`, using `store`
pub fn cache_in<K, S, E>(
    store: CacheStore,
    live: S,
    key: K,
    options: CacheOptions,
) -> CachedStream<K::Value, E>
where
    K: CacheKey + 'static,
    S: Stream<Item = Result<K::Value, E>> + Send + 'static,
    E: Send + 'static,
{
    debug!(
        key = key.name(),
        strategy = %options.strategy,
        persist_after_load = options.persist_after_load,
        "Decorating stream with cache"
    );
    match options.strategy {
        CacheStrategyType::IfHave => {
            GetIfAvailable::new(store, key, options.persist_after_load).execute(live)
        }
        CacheStrategyType::Only => GetOnly::new(store, key, options.persist_after_load).execute(live),
    }
}

/// Method-position form of [`cache`] and [`cache_in`]
pub trait CacheStreamExt<T, E>: Stream<Item = Result<T, E>> + Sized + Send + 'static {
    /// See [`cache`]
    fn cached<K>(self, key: K, options: CacheOptions) -> CachedStream<T, E>
    where
        K: CacheKey<Value = T> + 'static,
        E: Send + 'static,
    {
        cache(self, key, options)
    }

    /// See [`cache_in`]
    fn cached_in<K>(self, store: &CacheStore, key: K, options: CacheOptions) -> CachedStream<T, E>
    where
        K: CacheKey<Value = T> + 'static,
        E: Send + 'static,
    {
        cache_in(store.clone(), self, key, options)
    }
}

impl<S, T, E> CacheStreamExt<T, E> for S where S: Stream<Item = Result<T, E>> + Send + 'static {}
