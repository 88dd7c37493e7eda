//! Generic cache-aside engine
//!
//! One engine instance per domain service, parameterized by namespace and
//! TTL. The read path checks the cache, falls back to the supplied fetch on
//! a miss, and populates the cache afterwards. A `None` from the fetch is
//! returned as-is and never cached, so every not-found re-queries the
//! backend next time. Concurrent misses on the same key each fetch and
//! repopulate; each put is one atomic value write, so the race resolves
//! last-writer-wins.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKeyParams, DefaultKeyGenerator};

/// Cache-aside read engine bound to one key namespace and TTL
#[derive(Debug)]
pub struct CacheAside {
    cache: Arc<dyn Cache>,
    namespace: String,
    ttl: Duration,
    key_generator: DefaultKeyGenerator,
    hash_generator: DefaultKeyGenerator,
}

impl CacheAside {
    /// Creates an engine over the given cache handle
    pub fn new(cache: Arc<dyn Cache>, namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            cache,
            namespace: namespace.into(),
            ttl,
            key_generator: DefaultKeyGenerator::new(),
            hash_generator: DefaultKeyGenerator::new().with_short_hash(),
        }
    }

    /// Namespaced key from normalized parameters
    pub fn key(&self, params: &CacheKeyParams) -> String {
        self.key_generator
            .generate_with_namespace(&self.namespace, params)
    }

    /// Namespaced fixed-width hash key, for parameter sets carrying
    /// unbounded free text
    pub fn hashed_key(&self, params: &CacheKeyParams) -> String {
        self.hash_generator
            .generate_with_namespace(&self.namespace, params)
    }

    /// Reads through the cache, falling back to `fetch` on a miss
    ///
    /// A cache entry that no longer deserializes (stale schema after a
    /// format change) is treated as a miss and refetched instead of
    /// failing the request. Cache and backend connection failures are
    /// not swallowed.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<Option<T>, DomainError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Option<T>, DomainError>> + Send,
    {
        if let Some(raw) = self.cache.get_raw(key).await? {
            match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!(key = %key, "cache hit");
                    return Ok(Some(value));
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "undeserializable cache entry, refetching");
                }
            }
        }

        let Some(value) = fetch().await? else {
            return Ok(None);
        };

        let data = serde_json::to_string(&value)
            .map_err(|e| DomainError::cache(format!("Failed to serialize cache value: {}", e)))?;
        self.cache.set_raw(key, &data, self.ttl).await?;

        Ok(Some(value))
    }
}
