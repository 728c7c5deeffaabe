//! Query Cache Port - process-wide cache of query results
//!
//! Application code writes to the cache only through [`QueryCachePort::invalidate`];
//! `set` and `get` exist for the reader side that fetches and displays data.

use async_trait::async_trait;
use futures_channel::mpsc::UnboundedReceiver;
use serde_json::Value;
use thiserror::Error;

use crate::application::query_keys::QueryKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("Query cache is closed")]
    Closed,
}

/// Port for the query cache
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait QueryCachePort: Send + Sync {
    /// Mark every entry addressed by `key` (or any key it prefixes) stale.
    ///
    /// Returns once the invalidation is acknowledged, not after the refetch.
    /// The returned count is the number of entries marked stale.
    async fn invalidate(&self, key: &QueryKey) -> Result<usize, CacheError>;

    /// Cached payload for exactly `key`, if any.
    async fn get(&self, key: &QueryKey) -> Option<Value>;

    /// Store a freshly fetched payload for `key`.
    async fn set(&self, key: QueryKey, value: Value) -> Result<(), CacheError>;

    /// Drop the entry for exactly `key`, returning its payload.
    async fn remove(&self, key: &QueryKey) -> Option<Value>;

    /// Stream of keys marked stale from now on, for background refetching.
    async fn subscribe(&self) -> UnboundedReceiver<QueryKey>;
}
