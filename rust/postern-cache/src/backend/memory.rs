use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use postern_common::ConditionalSync;
use tokio::sync::RwLock;

use crate::PosternCacheError;

use super::FetchBackend;

/// A trivial implementation of [FetchBackend] - backed by a [HashMap] - where
/// all values are kept in memory. Useful as a stand-in data source in tests
/// and for pre-seeded, never-failing lookups.
#[derive(Clone, Default)]
pub struct MemoryFetchBackend<Key, Value>
where
    Key: Eq + std::hash::Hash,
    Value: Clone,
{
    entries: Arc<RwLock<HashMap<Key, Value>>>,
}

impl<Key, Value> MemoryFetchBackend<Key, Value>
where
    Key: Eq + std::hash::Hash,
    Value: Clone,
{
    /// Store the given value so that subsequent fetches of the key produce it
    pub async fn insert(&self, key: Key, value: Value) {
        let mut entries = self.entries.write().await;
        entries.insert(key, value);
    }

    /// Remove any value stored against the given key
    pub async fn remove(&self, key: &Key) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Key, Value> FetchBackend for MemoryFetchBackend<Key, Value>
where
    Key: Eq + std::hash::Hash + ConditionalSync,
    Value: Clone + ConditionalSync,
{
    type Key = Key;
    type Value = Value;
    type Error = PosternCacheError;

    async fn fetch(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }
}
