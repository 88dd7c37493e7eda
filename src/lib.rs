//! Movies API
//!
//! Read-oriented HTTP service over a movies search index with a
//! cache-aside layer in front of it:
//! - Films: detail, filtered listings, and free-text search
//! - Genres: detail and the full catalog
//! - Persons: detail with films grouped by role, search, and filmography
//!
//! Reads go through the cache first; misses fall back to the search
//! backend and populate the cache with a bounded TTL.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use infrastructure::cache::{CacheFactoryConfig, CacheType, create_cache};
use infrastructure::search::{ElasticsearchBackend, ElasticsearchConfig};
use infrastructure::services::{
    FilmService, FilmServiceConfig, GenreService, GenreServiceConfig, PersonService,
    PersonServiceConfig,
};

/// Create application state with all services wired up
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let cache_type = CacheType::from_str(&config.cache.backend)?;
    let cache = create_cache(&CacheFactoryConfig {
        cache_type,
        redis_url: Some(config.cache.redis_url.clone()),
        key_prefix: Some(config.cache.key_prefix.clone()),
        max_capacity: Some(config.cache.max_capacity),
    })
    .await?;

    let search: Arc<dyn domain::search::SearchBackend> = Arc::new(ElasticsearchBackend::new(
        ElasticsearchConfig::new(&config.search.url)
            .with_timeout(Duration::from_secs(config.search.timeout_secs)),
    )?);

    let film_service = Arc::new(FilmService::with_config(
        cache.clone(),
        search.clone(),
        FilmServiceConfig {
            collection: config.search.films_index.clone(),
            ttl: Duration::from_secs(config.cache.film_ttl_secs),
        },
    ));

    let genre_service = Arc::new(GenreService::with_config(
        cache.clone(),
        search.clone(),
        GenreServiceConfig {
            collection: config.search.genres_index.clone(),
            ttl: Duration::from_secs(config.cache.genre_ttl_secs),
            list_size: config.search.scan_size,
        },
    ));

    let person_service = Arc::new(PersonService::with_config(
        cache,
        search,
        PersonServiceConfig {
            people_collection: config.search.people_index.clone(),
            films_collection: config.search.films_index.clone(),
            ttl: Duration::from_secs(config.cache.person_ttl_secs),
            role_scan_size: config.search.scan_size,
        },
    ));

    Ok(AppState::new(film_service, genre_service, person_service))
}
