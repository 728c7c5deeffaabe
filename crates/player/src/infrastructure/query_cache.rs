//! In-memory query cache.
//!
//! Holds the latest payload per [`QueryKey`]. Invalidation never removes data:
//! it flags matching entries stale and notifies subscribers, which refetch in
//! the background and write the fresh payload back with `set`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use crate::application::query_keys::QueryKey;
use crate::ports::outbound::{CacheError, QueryCachePort};

/// Snapshot of one cached query
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub value: Value,
    pub fetched_at: DateTime<Utc>,
    pub stale: bool,
}

#[derive(Default)]
pub struct InMemoryQueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    subscribers: Mutex<Vec<UnboundedSender<QueryKey>>>,
    closed: AtomicBool,
}

impl InMemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop accepting writes and end all subscriptions.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        for subscriber in self.subscribers.lock().await.drain(..) {
            subscriber.close_channel();
        }
    }

    pub async fn entry(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries
            .read()
            .await
            .get(key)
            .is_some_and(|entry| entry.stale)
    }

    fn ensure_open(&self) -> Result<(), CacheError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(CacheError::Closed);
        }
        Ok(())
    }

    async fn notify(&self, keys: &[QueryKey]) {
        if keys.is_empty() {
            return;
        }
        let mut subscribers = self.subscribers.lock().await;
        // Dropped receivers fail the send and are pruned here.
        subscribers.retain(|subscriber| {
            keys.iter()
                .all(|key| subscriber.unbounded_send(key.clone()).is_ok())
        });
    }
}

#[async_trait]
impl QueryCachePort for InMemoryQueryCache {
    async fn invalidate(&self, key: &QueryKey) -> Result<usize, CacheError> {
        self.ensure_open()?;

        let invalidated: Vec<QueryKey> = {
            let mut entries = self.entries.write().await;
            entries
                .iter_mut()
                .filter(|(cached, _)| key.is_prefix_of(cached))
                .map(|(cached, entry)| {
                    entry.stale = true;
                    cached.clone()
                })
                .collect()
        };

        tracing::debug!(key = %key, count = invalidated.len(), "Marked queries stale");
        self.notify(&invalidated).await;
        Ok(invalidated.len())
    }

    async fn get(&self, key: &QueryKey) -> Option<Value> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|entry| entry.value.clone())
    }

    async fn set(&self, key: QueryKey, value: Value) -> Result<(), CacheError> {
        self.ensure_open()?;
        let entry = CacheEntry {
            value,
            fetched_at: Utc::now(),
            stale: false,
        };
        self.entries.write().await.insert(key, entry);
        Ok(())
    }

    async fn remove(&self, key: &QueryKey) -> Option<Value> {
        self.entries.write().await.remove(key).map(|entry| entry.value)
    }

    async fn subscribe(&self) -> UnboundedReceiver<QueryKey> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.lock().await.push(tx);
        rx
    }
}
