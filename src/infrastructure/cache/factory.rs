//! Cache factory for runtime backend selection

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::cache::Cache;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Supported cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheType {
    /// In-memory cache using moka
    #[default]
    InMemory,
    /// Redis cache
    Redis,
}

impl std::fmt::Display for CacheType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheType::InMemory => write!(f, "in_memory"),
            CacheType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for CacheType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(CacheType::InMemory),
            "redis" => Ok(CacheType::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown cache type: {}. Valid types: in_memory, redis",
                s
            ))),
        }
    }
}

/// Configuration for cache factory
#[derive(Debug, Clone, Default)]
pub struct CacheFactoryConfig {
    /// Backend to create
    pub cache_type: CacheType,
    /// Redis URL (required for the Redis backend)
    pub redis_url: Option<String>,
    /// Key prefix for namespacing (Redis only)
    pub key_prefix: Option<String>,
    /// Maximum capacity (in-memory only)
    pub max_capacity: Option<u64>,
}

/// Creates a cache instance from the given configuration
pub async fn create_cache(config: &CacheFactoryConfig) -> Result<Arc<dyn Cache>, DomainError> {
    match config.cache_type {
        CacheType::InMemory => {
            let mut mem_config = InMemoryCacheConfig::default();

            if let Some(capacity) = config.max_capacity {
                mem_config = mem_config.with_max_capacity(capacity);
            }

            Ok(Arc::new(InMemoryCache::with_config(mem_config)))
        }
        CacheType::Redis => {
            let url = config.redis_url.as_ref().ok_or_else(|| {
                DomainError::configuration("Redis cache requires a redis_url")
            })?;

            let mut redis_config = RedisCacheConfig::new(url);

            if let Some(prefix) = &config.key_prefix {
                redis_config = redis_config.with_key_prefix(prefix.clone());
            }

            Ok(Arc::new(RedisCache::new(redis_config).await?))
        }
    }
}
