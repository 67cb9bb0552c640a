use std::{
    collections::HashMap,
    hash::Hash,
    sync::Arc,
    time::{Duration, SystemTime},
};

use postern_common::time;
use tokio::sync::Mutex;

use crate::{FetchBackend, PosternCacheError};

/// A cached value alongside the moment it was stored.
struct Slot<Value> {
    entry: Option<(Value, SystemTime)>,
}

impl<Value> Default for Slot<Value> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<Value> Slot<Value> {
    fn fresh(&self, ttl: Duration) -> Option<&Value> {
        let (value, stored_at) = self.entry.as_ref()?;
        let age = time::now()
            .duration_since(*stored_at)
            .unwrap_or(Duration::MAX);
        (age < ttl).then_some(value)
    }
}

/// A [TtlCache] acts as an expiring, read-through proxy to an inner
/// [FetchBackend] implementation. Reads are memoized until the configured
/// time-to-live elapses, after which the next read triggers a fresh fetch.
///
/// Concurrent reads of the same key are deduplicated: each key has its own
/// lock, held across the underlying fetch, so callers that arrive while a
/// fetch is in flight queue on that lock and then observe the freshly stored
/// value instead of fetching again.
///
/// Backend failures never surface as errors from [TtlCache::get]: a failed
/// fetch resolves to `None` (and is logged), leaving any expired entry
/// discarded. Callers are expected to treat `None` as "cannot determine" and
/// keep whatever state they already hold.
///
/// Clones share the same underlying entries.
#[derive(Clone)]
pub struct TtlCache<Backend>
where
    Backend: FetchBackend,
    Backend::Key: Eq + Clone + Hash,
    Backend::Value: Clone,
{
    backend: Backend,
    ttl: Duration,
    slots: Arc<Mutex<HashMap<Backend::Key, Arc<Mutex<Slot<Backend::Value>>>>>>,
}

impl<Backend> TtlCache<Backend>
where
    Backend: FetchBackend,
    Backend::Key: Eq + Clone + Hash,
    Backend::Value: Clone,
{
    /// Wrap the provided [FetchBackend] so that values read through it are
    /// memoized for `ttl` per key.
    pub fn new(backend: Backend, ttl: Duration) -> Self {
        Self {
            backend,
            ttl,
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Read the value for `key`, fetching from the backend when no
    /// sufficiently recent value is cached. Resolves to `None` when the
    /// backend has no value for the key or the fetch fails.
    pub async fn get(&self, key: Backend::Key) -> Option<Backend::Value> {
        self.get_with_ttl(key, self.ttl).await
    }

    /// Like [TtlCache::get], but with a one-off time-to-live bound in place
    /// of the configured one.
    pub async fn get_with_ttl(&self, key: Backend::Key, ttl: Duration) -> Option<Backend::Value> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(key.clone()).or_default().clone()
        };

        // The slot lock is held across the fetch; this is the single-flight
        // guarantee for concurrent readers of one key
        let mut slot = slot.lock().await;

        if let Some(value) = slot.fresh(ttl) {
            return Some(value.clone());
        }

        match self.backend.fetch(&key).await {
            Ok(Some(value)) => {
                slot.entry = Some((value.clone(), time::now()));
                Some(value)
            }
            Ok(None) => {
                slot.entry = None;
                None
            }
            Err(error) => {
                let error: PosternCacheError = error.into();
                tracing::warn!("Fetch for cached key failed: {error}");
                slot.entry = None;
                None
            }
        }
    }

    /// Discard any cached value for `key`, so that the next read fetches from
    /// the backend regardless of how recently the value was stored.
    pub async fn invalidate(&self, key: &Backend::Key) {
        let slot = {
            let slots = self.slots.lock().await;
            slots.get(key).cloned()
        };
        if let Some(slot) = slot {
            slot.lock().await.entry = None;
        }
    }
}

#[cfg(test)]
#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        sync::Arc,
        time::Duration,
    };

    use anyhow::Result;
    use async_trait::async_trait;

    use crate::{FetchBackend, PosternCacheError, TtlCache};

    /// A backend that counts fetches and can simulate latency or failure
    #[derive(Clone)]
    struct CountingBackend {
        paths: Option<Vec<String>>,
        delay: Option<Duration>,
        fetches: Arc<AtomicUsize>,
    }

    impl CountingBackend {
        fn producing(paths: Vec<String>) -> Self {
            Self {
                paths: Some(paths),
                delay: None,
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn empty() -> Self {
            Self {
                paths: None,
                delay: None,
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl FetchBackend for CountingBackend {
        type Key = String;
        type Value = Vec<String>;
        type Error = PosternCacheError;

        async fn fetch(&self, _key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.paths.clone())
        }
    }

    /// A backend whose every fetch fails
    #[derive(Clone)]
    struct FailingBackend;

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl FetchBackend for FailingBackend {
        type Key = String;
        type Value = Vec<String>;
        type Error = PosternCacheError;

        async fn fetch(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
            Err(PosternCacheError::FetchFailed(format!(
                "no route to host for '{key}'"
            )))
        }
    }

    #[tokio::test]
    async fn it_memoizes_values_within_the_ttl() -> Result<()> {
        let backend = CountingBackend::producing(vec!["Root.Admin".into()]);
        let cache = TtlCache::new(backend.clone(), Duration::from_secs(60));

        let first = cache.get("auth".to_string()).await;
        let second = cache.get("auth".to_string()).await;

        assert_eq!(first, Some(vec!["Root.Admin".to_string()]));
        assert_eq!(second, first);
        assert_eq!(backend.fetch_count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn it_refetches_after_the_ttl_elapses() -> Result<()> {
        let backend = CountingBackend::producing(vec!["Root.Admin".into()]);
        let cache = TtlCache::new(backend.clone(), Duration::from_millis(20));

        cache.get("auth".to_string()).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.get("auth".to_string()).await;

        assert_eq!(backend.fetch_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn it_deduplicates_concurrent_fetches_of_one_key() -> Result<()> {
        let backend = CountingBackend::producing(vec!["Root.Admin".into()])
            .with_delay(Duration::from_millis(20));
        let cache = TtlCache::new(backend.clone(), Duration::from_secs(60));

        let (first, second) = tokio::join!(
            cache.get("auth".to_string()),
            cache.get("auth".to_string())
        );

        assert_eq!(first, Some(vec!["Root.Admin".to_string()]));
        assert_eq!(second, first);
        assert_eq!(backend.fetch_count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn it_fetches_distinct_keys_independently() -> Result<()> {
        let backend = CountingBackend::producing(vec!["Root.Admin".into()]);
        let cache = TtlCache::new(backend.clone(), Duration::from_secs(60));

        cache.get("auth".to_string()).await;
        cache.get("roles".to_string()).await;

        assert_eq!(backend.fetch_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn it_resolves_fetch_failures_to_none() -> Result<()> {
        let cache = TtlCache::new(FailingBackend, Duration::from_secs(60));

        assert_eq!(cache.get("auth".to_string()).await, None);

        Ok(())
    }

    #[tokio::test]
    async fn it_resolves_missing_values_to_none_without_memoizing() -> Result<()> {
        let backend = CountingBackend::empty();
        let cache = TtlCache::new(backend.clone(), Duration::from_secs(60));

        assert_eq!(cache.get("auth".to_string()).await, None);
        assert_eq!(cache.get("auth".to_string()).await, None);

        // Absence is not memoized; each read consults the backend again
        assert_eq!(backend.fetch_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn it_refetches_after_invalidation() -> Result<()> {
        let backend = CountingBackend::producing(vec!["Root.Admin".into()]);
        let cache = TtlCache::new(backend.clone(), Duration::from_secs(60));

        cache.get("auth".to_string()).await;
        cache.invalidate(&"auth".to_string()).await;
        cache.get("auth".to_string()).await;

        assert_eq!(backend.fetch_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn it_honors_a_one_off_ttl_override() -> Result<()> {
        let backend = CountingBackend::producing(vec!["Root.Admin".into()]);
        let cache = TtlCache::new(backend.clone(), Duration::from_secs(60));

        cache.get("auth".to_string()).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        // The configured TTL would consider the entry fresh; the override
        // does not
        cache
            .get_with_ttl("auth".to_string(), Duration::from_millis(1))
            .await;

        assert_eq!(backend.fetch_count(), 2);

        Ok(())
    }
}
