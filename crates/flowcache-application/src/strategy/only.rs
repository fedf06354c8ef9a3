use super::{CacheStrategy, CachedStream, Phase, persist};
use crate::store::CacheStore;
use flowcache_domain::keys::CacheKey;
use futures::{Stream, StreamExt, stream};
use std::pin::Pin;
use tracing::warn;

/// Get-Only
///
/// Emits at most one element: the value cached before the stream started.
/// The live stream is still consumed to completion so that, with
/// `persist_after_load`, the next subscriber sees fresh data. Live values are
/// never forwarded.
///
/// An empty cache is not an error: nothing is emitted and a cache-miss
/// warning is logged.
///
/// Draining yields to the executor after every live value, so dropping the
/// decorated stream (or a timeout around it) stops the live stream even when
/// it never waits.
#[derive(Debug)]
pub struct GetOnly<K> {
    store: CacheStore,
    key: K,
    persist_after_load: bool,
}

impl<K: CacheKey + 'static> GetOnly<K> {
    /// Create the strategy for one decoration
    pub fn new(store: CacheStore, key: K, persist_after_load: bool) -> Self {
        Self {
            store,
            key,
            persist_after_load,
        }
    }

    async fn advance<S, E>(self, phase: Phase<S>) -> Option<(Result<K::Value, E>, (Self, Phase<S>))>
    where
        S: Stream<Item = Result<K::Value, E>>,
    {
        match phase {
            Phase::Start(live) => {
                if let Some(cached) = self.store.get(&self.key).await {
                    return Some((Ok(cached), (self, Phase::Live(live))));
                }
                warn!(
                    key = self.key.name(),
                    value_type = self.key.value_type_name(),
                    "No cached value available, emitting nothing"
                );
                self.drain(live).await
            }
            Phase::Live(live) => self.drain(live).await,
            Phase::Done => None,
        }
    }

    /// Consume the live stream, surfacing only its failure
    async fn drain<S, E>(self, mut live: Pin<Box<S>>) -> Option<(Result<K::Value, E>, (Self, Phase<S>))>
    where
        S: Stream<Item = Result<K::Value, E>>,
    {
        while let Some(item) = live.next().await {
            match item {
                Ok(value) => {
                    if self.persist_after_load {
                        persist(&self.store, &self.key, &value).await;
                    }
                }
                Err(e) => return Some((Err(e), (self, Phase::Done))),
            }
            // Hand control back so an always-ready live stream cannot hold the poll forever
            tokio::task::yield_now().await;
        }
        None
    }
}

impl<K: CacheKey + 'static> CacheStrategy<K> for GetOnly<K> {
    fn execute<S, E>(self, live: S) -> CachedStream<K::Value, E>
    where
        S: Stream<Item = Result<K::Value, E>> + Send + 'static,
        E: Send + 'static,
    {
        let initial = (self, Phase::Start(Box::pin(live)));
        Box::pin(stream::unfold(initial, |(strategy, phase)| {
            strategy.advance(phase)
        }))
    }
}
