//! Cache infrastructure - Redis and in-memory implementations

mod factory;
mod in_memory;
mod redis;

pub use factory::{CacheFactoryConfig, CacheType, create_cache};
pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
pub use redis::{RedisCache, RedisCacheConfig};
