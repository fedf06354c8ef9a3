//! Cache Strategy Tests

use crate::support::{FailingBackend, Profile, memory_store};
use flowcache_application::{CacheStore, CacheStrategy, GetIfAvailable, GetOnly};
use flowcache_domain::{IntegerKey, JsonKey, StringKey};
use futures::{StreamExt, stream};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn live(values: &[&str]) -> impl futures::Stream<Item = Result<String, String>> + Send + 'static {
    let items: Vec<Result<String, String>> = values.iter().map(|v| Ok((*v).to_string())).collect();
    stream::iter(items)
}

async fn collect_ok<S>(decorated: S) -> Vec<String>
where
    S: futures::Stream<Item = Result<String, String>>,
{
    decorated
        .map(|item| item.expect("live stream should not fail"))
        .collect()
        .await
}

// ---------------------------------------------------------------------------
// Get-If-Available
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_if_available_emits_cached_then_live() {
    let store = memory_store();
    let key = StringKey::new("headline");
    store.set(&key, &"c".to_string()).await.unwrap();

    let decorated = GetIfAvailable::new(store.clone(), key.clone(), true).execute(live(&["a", "b"]));

    assert_eq!(collect_ok(decorated).await, vec!["c", "a", "b"]);
    assert_eq!(store.get(&key).await, Some("b".to_string()));
}

#[tokio::test]
async fn test_if_available_without_cache_emits_live_only() {
    let store = memory_store();
    let key = StringKey::new("headline");

    let decorated = GetIfAvailable::new(store.clone(), key.clone(), true).execute(live(&["a", "b"]));

    assert_eq!(collect_ok(decorated).await, vec!["a", "b"]);
    assert_eq!(store.get(&key).await, Some("b".to_string()));
}

#[tokio::test]
async fn test_if_available_does_not_deduplicate() {
    let store = memory_store();
    let key = StringKey::new("headline");
    store.set(&key, &"a".to_string()).await.unwrap();

    let decorated = GetIfAvailable::new(store, key, true).execute(live(&["a"]));

    assert_eq!(collect_ok(decorated).await, vec!["a", "a"]);
}

#[tokio::test]
async fn test_if_available_without_persistence_keeps_cache() {
    let store = memory_store();
    let key = StringKey::new("headline");
    store.set(&key, &"c".to_string()).await.unwrap();

    let decorated = GetIfAvailable::new(store.clone(), key.clone(), false).execute(live(&["a", "b"]));

    assert_eq!(collect_ok(decorated).await, vec!["c", "a", "b"]);
    assert_eq!(store.get(&key).await, Some("c".to_string()));
    assert_eq!(store.stats().writes, 1);
}

#[tokio::test]
async fn test_if_available_forwards_live_failure_and_stops() {
    let store = memory_store();
    let key = StringKey::new("headline");
    store.set(&key, &"c".to_string()).await.unwrap();

    let source = stream::iter(vec![
        Ok("a".to_string()),
        Err("boom".to_string()),
        Ok("b".to_string()),
    ]);
    let items: Vec<Result<String, String>> = GetIfAvailable::new(store.clone(), key.clone(), true)
        .execute(source)
        .collect()
        .await;

    assert_eq!(
        items,
        vec![
            Ok("c".to_string()),
            Ok("a".to_string()),
            Err("boom".to_string())
        ]
    );
    assert_eq!(store.get(&key).await, Some("a".to_string()));
}

#[tokio::test]
async fn test_if_available_ignores_undecodable_cache() {
    let store = memory_store();
    store
        .set(&StringKey::new("profile"), &"corrupt".to_string())
        .await
        .unwrap();
    let key = JsonKey::<Profile>::new("profile");
    let fresh = Profile {
        name: "ada".to_string(),
        visits: 1,
    };

    let items: Vec<Profile> = GetIfAvailable::new(store.clone(), key.clone(), true)
        .execute(stream::iter(vec![Ok::<_, String>(fresh.clone())]))
        .map(Result::unwrap)
        .collect()
        .await;

    assert_eq!(items, vec![fresh.clone()]);
    assert_eq!(store.get(&key).await, Some(fresh));
}

#[tokio::test]
async fn test_if_available_survives_write_failures() {
    let store = CacheStore::new(FailingBackend);
    let key = StringKey::new("headline");

    let decorated = GetIfAvailable::new(store, key, true).execute(live(&["a", "b"]));

    assert_eq!(collect_ok(decorated).await, vec!["a", "b"]);
}

#[tokio::test]
async fn test_if_available_cancellation_stops_live_stream() {
    let store = memory_store();
    let key = IntegerKey::new("ticks");
    let endless = stream::iter(0_i64..).map(Ok::<_, String>);

    let decorated = GetIfAvailable::new(store.clone(), key.clone(), true).execute(endless);
    let taken: Vec<i64> = tokio::time::timeout(TIMEOUT, decorated.take(3).map(Result::unwrap).collect())
        .await
        .expect("consumer should not hang");

    assert_eq!(taken, vec![0, 1, 2]);
    // No writes happen once the consumer stops polling
    assert_eq!(store.stats().writes, 3);
    assert_eq!(store.get(&key).await, Some(2));
}

// ---------------------------------------------------------------------------
// Get-Only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_only_emits_cached_and_refreshes() {
    let store = memory_store();
    let key = StringKey::new("headline");
    store.set(&key, &"c".to_string()).await.unwrap();

    let decorated = GetOnly::new(store.clone(), key.clone(), true).execute(live(&["a", "b"]));

    assert_eq!(collect_ok(decorated).await, vec!["c"]);
    assert_eq!(store.get(&key).await, Some("b".to_string()));
}

#[tokio::test]
async fn test_only_miss_emits_nothing_and_records_miss() {
    let store = memory_store();
    let key = StringKey::new("headline");

    let decorated = GetOnly::new(store.clone(), key.clone(), true).execute(live(&["a", "b"]));

    assert!(collect_ok(decorated).await.is_empty());
    let stats = store.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.writes, 2);
    assert_eq!(store.get(&key).await, Some("b".to_string()));
}

#[tokio::test]
async fn test_only_without_persistence_leaves_cache_untouched() {
    let store = memory_store();
    let key = StringKey::new("headline");

    let decorated = GetOnly::new(store.clone(), key.clone(), false).execute(live(&["a", "b"]));

    assert!(collect_ok(decorated).await.is_empty());
    assert_eq!(store.stats().writes, 0);
    assert_eq!(store.get(&key).await, None);
}

#[tokio::test]
async fn test_only_forwards_live_failure() {
    let store = memory_store();
    let key = IntegerKey::new("count");
    store.set(&key, &10).await.unwrap();

    let source = stream::iter(vec![Ok(11), Err("boom".to_string()), Ok(12)]);
    let items: Vec<Result<i64, String>> = GetOnly::new(store.clone(), key.clone(), true)
        .execute(source)
        .collect()
        .await;

    assert_eq!(items, vec![Ok(10), Err("boom".to_string())]);
    assert_eq!(store.get(&key).await, Some(11));
}

#[tokio::test]
async fn test_only_cancellation_after_cached_value() {
    let store = memory_store();
    let key = StringKey::new("headline");
    store.set(&key, &"c".to_string()).await.unwrap();

    // Live stream never completes after its first value
    let source = live(&["a"]).chain(stream::pending());
    let mut decorated = GetOnly::new(store.clone(), key.clone(), true).execute(source);

    let first = tokio::time::timeout(TIMEOUT, decorated.next())
        .await
        .expect("cached value should arrive without waiting for the live stream");
    assert_eq!(first, Some(Ok("c".to_string())));

    drop(decorated);
    assert_eq!(store.get(&key).await, Some("c".to_string()));
    assert_eq!(store.stats().writes, 1);
}

#[tokio::test]
async fn test_only_drain_of_endless_live_stream_can_time_out() {
    let store = memory_store();
    let key = IntegerKey::new("ticks");
    let endless = stream::iter(0_i64..).map(Ok::<_, String>);

    let mut decorated = GetOnly::new(store.clone(), key.clone(), false).execute(endless);
    let waited = tokio::time::timeout(Duration::from_millis(200), decorated.next()).await;

    assert!(waited.is_err(), "draining never finishes, so the timeout must fire");
    drop(decorated);
    assert_eq!(store.get(&key).await, None);
}

#[tokio::test]
async fn test_only_drain_yields_to_select() {
    let store = memory_store();
    let key = IntegerKey::new("ticks");
    let endless = stream::iter(0_i64..).map(Ok::<_, String>);

    let mut decorated = GetOnly::new(store.clone(), key.clone(), true).execute(endless);
    let stopped = tokio::select! {
        _ = decorated.next() => false,
        () = tokio::time::sleep(Duration::from_millis(100)) => true,
    };
    drop(decorated);

    assert!(stopped);
    let writes_after_drop = store.stats().writes;
    assert!(writes_after_drop > 0);
    tokio::task::yield_now().await;
    assert_eq!(store.stats().writes, writes_after_drop);
}
