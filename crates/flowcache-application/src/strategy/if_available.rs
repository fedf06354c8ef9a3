use super::{CacheStrategy, CachedStream, Phase, persist};
use crate::store::CacheStore;
use flowcache_domain::keys::CacheKey;
use futures::{Stream, StreamExt, stream};
use std::pin::Pin;

/// Get-If-Available
///
/// Emits the cached value first when there is one, then every live value in
/// live order. With `persist_after_load` each live value overwrites the
/// cache. A live value equal to the cached one is emitted again.
///
/// A live value is written before it is handed downstream, so a consumer
/// that stops right after receiving a value finds that value cached.
#[derive(Debug)]
pub struct GetIfAvailable<K> {
    store: CacheStore,
    key: K,
    persist_after_load: bool,
}

impl<K: CacheKey + 'static> GetIfAvailable<K> {
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
            Phase::Start(live) => match self.store.get(&self.key).await {
                Some(cached) => Some((Ok(cached), (self, Phase::Live(live)))),
                None => self.next_live(live).await,
            },
            Phase::Live(live) => self.next_live(live).await,
            Phase::Done => None,
        }
    }

    async fn next_live<S, E>(
        self,
        mut live: Pin<Box<S>>,
    ) -> Option<(Result<K::Value, E>, (Self, Phase<S>))>
    where
        S: Stream<Item = Result<K::Value, E>>,
    {
        match live.next().await? {
            Ok(value) => {
                if self.persist_after_load {
                    persist(&self.store, &self.key, &value).await;
                }
                Some((Ok(value), (self, Phase::Live(live))))
            }
            Err(e) => Some((Err(e), (self, Phase::Done))),
        }
    }
}

impl<K: CacheKey + 'static> CacheStrategy<K> for GetIfAvailable<K> {
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
