//! Genre read service

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::cache_aside::CacheAside;
use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKeyParams};
use crate::domain::genre::Genre;
use crate::domain::search::{Page, SearchBackend, SearchBackendExt, SearchQuery};

/// Configuration for the genre service
#[derive(Debug, Clone)]
pub struct GenreServiceConfig {
    /// Search collection holding genre documents
    pub collection: String,
    /// Cache TTL for genre entries and the full genre list
    pub ttl: Duration,
    /// Upper bound on the genre collection size for the whole-list fetch
    pub list_size: u32,
}

impl Default for GenreServiceConfig {
    fn default() -> Self {
        Self {
            collection: "genres".to_string(),
            ttl: Duration::from_secs(300),
            list_size: 1000,
        }
    }
}

/// Read service for the genres collection
///
/// The genre catalog is small and unpaginated; `list` caches the entire
/// collection under one fixed key.
#[derive(Debug)]
pub struct GenreService {
    search: Arc<dyn SearchBackend>,
    engine: CacheAside,
    config: GenreServiceConfig,
}

impl GenreService {
    pub fn new(cache: Arc<dyn Cache>, search: Arc<dyn SearchBackend>) -> Self {
        Self::with_config(cache, search, GenreServiceConfig::default())
    }

    pub fn with_config(
        cache: Arc<dyn Cache>,
        search: Arc<dyn SearchBackend>,
        config: GenreServiceConfig,
    ) -> Self {
        Self {
            search,
            engine: CacheAside::new(cache, "genre", config.ttl),
            config,
        }
    }

    /// Fetches one genre by id, read through the cache
    pub async fn get_by_id(&self, genre_id: &str) -> Result<Option<Genre>, DomainError> {
        let key = self.engine.key(&CacheKeyParams::new(genre_id));

        self.engine
            .get_or_fetch(&key, || async {
                debug!(genre_id = %genre_id, "fetching genre from search backend");
                self.search
                    .get_typed::<Genre>(&self.config.collection, genre_id)
                    .await
            })
            .await
    }

    /// Lists every genre, whole collection cached under one fixed key
    ///
    /// An empty backend result is returned as-is and not cached.
    pub async fn list(&self) -> Result<Vec<Genre>, DomainError> {
        let key = self.engine.key(&CacheKeyParams::new("all"));

        let genres = self
            .engine
            .get_or_fetch(&key, || async {
                debug!("fetching full genre list");
                let (_, genres) = self
                    .search
                    .search_typed::<Genre>(
                        &self.config.collection,
                        &SearchQuery::MatchAll,
                        None,
                        Page::new(self.config.list_size, 1),
                    )
                    .await?;

                if genres.is_empty() {
                    return Ok(None);
                }

                Ok(Some(genres))
            })
            .await?;

        Ok(genres.unwrap_or_default())
    }
}
