//! Cache key derivation
//!
//! List endpoints cache under a key derived from the full normalized parameter
//! set. Components are kept in a `BTreeMap` so two requests with the same
//! effective parameters map to the same key regardless of the order they were
//! supplied in.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Parameters for cache key derivation
#[derive(Debug, Clone, Default)]
pub struct CacheKeyParams {
    /// Primary identifier (e.g., a document id or an operation name)
    pub primary: String,
    /// Secondary components, sorted for consistency
    pub components: BTreeMap<String, String>,
}

impl CacheKeyParams {
    /// Creates new cache key parameters with a primary identifier
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            components: BTreeMap::new(),
        }
    }

    /// Adds a component to the key parameters
    pub fn with_component(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.insert(key.into(), value.into());
        self
    }

    /// Adds a component only when the value is present
    pub fn with_optional_component(
        self,
        key: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        match value {
            Some(value) => self.with_component(key, value),
            None => self,
        }
    }
}

/// Default cache key generator
///
/// Renders `primary:k1=v1:k2=v2`, optionally collapsed into a fixed-width
/// hash for keys whose components can grow unbounded (free-text queries).
#[derive(Debug, Clone, Default)]
pub struct DefaultKeyGenerator {
    use_short_hash: bool,
}

impl DefaultKeyGenerator {
    /// Creates a new default key generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that produces fixed-width hash keys
    pub fn with_short_hash(mut self) -> Self {
        self.use_short_hash = true;
        self
    }

    /// Generates a cache key from the given components
    pub fn generate(&self, params: &CacheKeyParams) -> String {
        let mut parts = vec![params.primary.clone()];

        for (k, v) in &params.components {
            parts.push(format!("{}={}", k, v));
        }

        let combined = parts.join(":");

        if self.use_short_hash {
            format!("{:016x}", Self::hash_string(&combined))
        } else {
            combined
        }
    }

    /// Generates a key with a namespace prefix
    pub fn generate_with_namespace(&self, namespace: &str, params: &CacheKeyParams) -> String {
        format!("{}:{}", namespace, self.generate(params))
    }

    fn hash_string(input: &str) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        input.hash(&mut hasher);
        hasher.finish()
    }
}
