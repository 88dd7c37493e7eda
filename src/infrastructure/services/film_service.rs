//! Film read service

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::cache_aside::CacheAside;
use crate::domain::cache::{Cache, CacheKeyParams};
use crate::domain::film::{Film, Paginated};
use crate::domain::search::{Page, SearchBackend, SearchBackendExt, SearchQuery, SortOrder};
use crate::domain::{DomainError, Role};

/// Configuration for the film service
#[derive(Debug, Clone)]
pub struct FilmServiceConfig {
    /// Search collection holding film documents
    pub collection: String,
    /// Cache TTL for film entries and film result pages
    pub ttl: Duration,
}

impl Default for FilmServiceConfig {
    fn default() -> Self {
        Self {
            collection: "films".to_string(),
            ttl: Duration::from_secs(300),
        }
    }
}

/// Normalized parameters for filtered film listings
///
/// Filters combine with AND; the cache key derived from these is
/// independent of the order the request supplied them in.
#[derive(Debug, Clone, Default)]
pub struct ListFilmsParams {
    /// Only films referencing this genre id
    pub genre: Option<String>,
    /// Only films where this person holds any role
    pub person: Option<String>,
    pub sort: Option<SortOrder>,
    pub page: Page,
}

/// Read service for the films collection
#[derive(Debug)]
pub struct FilmService {
    search: Arc<dyn SearchBackend>,
    engine: CacheAside,
    config: FilmServiceConfig,
}

impl FilmService {
    pub fn new(cache: Arc<dyn Cache>, search: Arc<dyn SearchBackend>) -> Self {
        Self::with_config(cache, search, FilmServiceConfig::default())
    }

    pub fn with_config(
        cache: Arc<dyn Cache>,
        search: Arc<dyn SearchBackend>,
        config: FilmServiceConfig,
    ) -> Self {
        Self {
            search,
            engine: CacheAside::new(cache, "film", config.ttl),
            config,
        }
    }

    /// Fetches one film by id, read through the cache
    pub async fn get_by_id(&self, film_id: &str) -> Result<Option<Film>, DomainError> {
        let key = self.engine.key(&CacheKeyParams::new(film_id));

        self.engine
            .get_or_fetch(&key, || async {
                debug!(film_id = %film_id, "fetching film from search backend");
                self.search
                    .get_typed::<Film>(&self.config.collection, film_id)
                    .await
            })
            .await
    }

    /// Filtered, sorted, paginated film listing
    ///
    /// Returns `None` when the page has no hits; callers map that to a
    /// not-found response.
    pub async fn list(
        &self,
        params: &ListFilmsParams,
    ) -> Result<Option<Paginated<Film>>, DomainError> {
        let key = self.engine.key(&Self::list_key_params(params));
        let query = Self::build_list_query(params);

        self.engine
            .get_or_fetch(&key, || async {
                debug!(?params, "querying film listing");
                let (total, films) = self
                    .search
                    .search_typed::<Film>(&self.config.collection, &query, params.sort, params.page)
                    .await?;

                if films.is_empty() {
                    return Ok(None);
                }

                Ok(Some(Paginated::new(total, films)))
            })
            .await
    }

    /// Free-text film search over title and description
    ///
    /// Separate from filtered listing; the two are never combined.
    pub async fn search(
        &self,
        query_text: &str,
        page: Page,
    ) -> Result<Option<Paginated<Film>>, DomainError> {
        let key_params = CacheKeyParams::new("search")
            .with_component("query", query_text)
            .with_component("page_size", page.size.to_string())
            .with_component("page_number", page.number.to_string());
        // Free text is unbounded, collapse the key to a hash
        let key = self.engine.hashed_key(&key_params);

        let query = SearchQuery::text(vec!["title", "description"], query_text);

        self.engine
            .get_or_fetch(&key, || async {
                debug!(query = %query_text, "searching films");
                let (total, films) = self
                    .search
                    .search_typed::<Film>(&self.config.collection, &query, None, page)
                    .await?;

                if films.is_empty() {
                    return Ok(None);
                }

                Ok(Some(Paginated::new(total, films)))
            })
            .await
    }

    fn list_key_params(params: &ListFilmsParams) -> CacheKeyParams {
        CacheKeyParams::new("list")
            .with_optional_component("genre", params.genre.as_deref())
            .with_optional_component("person", params.person.as_deref())
            .with_optional_component(
                "sort",
                params.sort.map(|s| match s {
                    SortOrder::RatingAsc => "rating",
                    SortOrder::RatingDesc => "-rating",
                }),
            )
            .with_component("page_size", params.page.size.to_string())
            .with_component("page_number", params.page.number.to_string())
    }

    fn build_list_query(params: &ListFilmsParams) -> SearchQuery {
        let mut clauses = Vec::new();

        if let Some(genre) = &params.genre {
            clauses.push(SearchQuery::contains("categories", genre.clone()));
        }

        if let Some(person) = &params.person {
            clauses.push(SearchQuery::Or(
                Role::ALL
                    .iter()
                    .map(|role| {
                        SearchQuery::nested_contains(role.film_field(), "id", person.clone())
                    })
                    .collect(),
            ));
        }

        match clauses.len() {
            0 => SearchQuery::MatchAll,
            1 => clauses.remove(0),
            _ => SearchQuery::And(clauses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCache;
    use crate::domain::search::MockSearchBackend;
    use serde_json::json;

    fn film_doc(id: &str, title: &str, rating: f64) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "rating": rating,
            "categories": ["g1"],
            "actors": [{"id": "p1", "name": "A"}],
            "writers": [],
            "directors": []
        })
    }

    fn service(backend: MockSearchBackend) -> (FilmService, Arc<MockSearchBackend>) {
        let backend = Arc::new(backend);
        let service = FilmService::new(Arc::new(MockCache::new()), backend.clone());
        (service, backend)
    }

    #[tokio::test]
    async fn test_get_by_id_returns_film() {
        let (service, _) = service(
            MockSearchBackend::new().with_document("films", film_doc("f1", "X", 7.5)),
        );

        let film = service.get_by_id("f1").await.unwrap().unwrap();
        assert_eq!(film.id, "f1");
        assert_eq!(film.title, "X");
        assert_eq!(film.rating, 7.5);
    }

    #[tokio::test]
    async fn test_get_by_id_served_from_cache_on_repeat() {
        let (service, backend) = service(
            MockSearchBackend::new().with_document("films", film_doc("f1", "X", 7.5)),
        );

        let first = service.get_by_id("f1").await.unwrap().unwrap();
        let second = service.get_by_id("f1").await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(backend.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_requeries_every_time() {
        let (service, backend) = service(MockSearchBackend::new());

        assert!(service.get_by_id("nope").await.unwrap().is_none());
        assert!(service.get_by_id("nope").await.unwrap().is_none());

        // No negative caching
        assert_eq!(backend.get_calls(), 2);
    }

    #[tokio::test]
    async fn test_list_filters_by_genre() {
        let (service, _) = service(
            MockSearchBackend::new()
                .with_document("films", film_doc("f1", "X", 7.5))
                .with_document(
                    "films",
                    json!({"id": "f2", "title": "Y", "rating": 3.0, "categories": ["g2"]}),
                ),
        );

        let params = ListFilmsParams {
            genre: Some("g1".to_string()),
            ..Default::default()
        };
        let page = service.list(&params).await.unwrap().unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.results[0].id, "f1");
    }

    #[tokio::test]
    async fn test_list_filters_by_person_across_roles() {
        let (service, _) = service(
            MockSearchBackend::new()
                .with_document("films", film_doc("f1", "X", 7.5))
                .with_document(
                    "films",
                    json!({"id": "f2", "title": "Y", "rating": 3.0,
                           "directors": [{"id": "p1", "name": "A"}]}),
                ),
        );

        let params = ListFilmsParams {
            person: Some("p1".to_string()),
            sort: Some(SortOrder::RatingDesc),
            ..Default::default()
        };
        let page = service.list(&params).await.unwrap().unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.results[0].id, "f1");
        assert_eq!(page.results[1].id, "f2");
    }

    #[tokio::test]
    async fn test_list_zero_matches_is_none() {
        let (service, _) = service(
            MockSearchBackend::new().with_document("films", film_doc("f1", "X", 7.5)),
        );

        let params = ListFilmsParams {
            genre: Some("no-such-genre".to_string()),
            ..Default::default()
        };

        assert!(service.list(&params).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_cache_key_independent_of_construction_order() {
        let (service, backend) = service(
            MockSearchBackend::new().with_document("films", film_doc("f1", "X", 7.5)),
        );

        // Same effective parameters built in different field order
        let a = ListFilmsParams {
            genre: Some("g1".to_string()),
            person: Some("p1".to_string()),
            ..Default::default()
        };
        let b = ListFilmsParams {
            person: Some("p1".to_string()),
            genre: Some("g1".to_string()),
            ..Default::default()
        };

        service.list(&a).await.unwrap().unwrap();
        service.list(&b).await.unwrap().unwrap();

        // Second call hits the cache
        assert_eq!(backend.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_distinct_list_params_use_distinct_keys() {
        let (service, backend) = service(
            MockSearchBackend::new()
                .with_document("films", film_doc("f1", "X", 7.5))
                .with_document(
                    "films",
                    json!({"id": "f2", "title": "Y", "rating": 3.0, "categories": ["g2"]}),
                ),
        );

        let a = ListFilmsParams {
            genre: Some("g1".to_string()),
            ..Default::default()
        };
        let b = ListFilmsParams {
            genre: Some("g2".to_string()),
            ..Default::default()
        };

        let page_a = service.list(&a).await.unwrap().unwrap();
        let page_b = service.list(&b).await.unwrap().unwrap();

        assert_eq!(page_a.results[0].id, "f1");
        assert_eq!(page_b.results[0].id, "f2");
        assert_eq!(backend.search_calls(), 2);
    }

    #[tokio::test]
    async fn test_search_free_text_matches_title() {
        let (service, backend) = service(
            MockSearchBackend::new()
                .with_document("films", film_doc("f1", "Star Voyage", 7.5))
                .with_document("films", film_doc("f2", "Quiet Garden", 6.0)),
        );

        let page = service
            .search("star", Page::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.results[0].id, "f1");

        // Repeat is a cache hit
        service.search("star", Page::default()).await.unwrap();
        assert_eq!(backend.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_search_zero_matches_is_none() {
        let (service, _) = service(
            MockSearchBackend::new().with_document("films", film_doc("f1", "X", 7.5)),
        );

        let result = service.search("zebra", Page::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_ttl_expiry_triggers_single_refetch() {
        let backend = Arc::new(
            MockSearchBackend::new().with_document("films", film_doc("f1", "X", 7.5)),
        );
        let service = FilmService::with_config(
            Arc::new(crate::infrastructure::cache::InMemoryCache::new()),
            backend.clone(),
            FilmServiceConfig {
                ttl: Duration::from_millis(30),
                ..Default::default()
            },
        );

        service.get_by_id("f1").await.unwrap();
        service.get_by_id("f1").await.unwrap();
        assert_eq!(backend.get_calls(), 1);

        tokio::time::sleep(Duration::from_millis(60)).await;

        service.get_by_id("f1").await.unwrap();
        service.get_by_id("f1").await.unwrap();
        assert_eq!(backend.get_calls(), 2);
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let (service, _) = service(MockSearchBackend::new().with_error("cluster down"));

        let result = service.get_by_id("f1").await;
        assert!(matches!(result, Err(DomainError::SearchBackend { .. })));
    }

    #[test]
    fn test_build_list_query_with_both_filters() {
        let params = ListFilmsParams {
            genre: Some("g1".to_string()),
            person: Some("p1".to_string()),
            ..Default::default()
        };

        match FilmService::build_list_query(&params) {
            SearchQuery::And(clauses) => {
                assert_eq!(clauses.len(), 2);
                assert_eq!(clauses[0], SearchQuery::contains("categories", "g1"));
                match &clauses[1] {
                    SearchQuery::Or(roles) => assert_eq!(roles.len(), 3),
                    other => panic!("expected Or, got {:?}", other),
                }
            }
            other => panic!("expected And, got {:?}", other),
        }
    }

    #[test]
    fn test_build_list_query_without_filters_matches_all() {
        let params = ListFilmsParams::default();
        assert_eq!(
            FilmService::build_list_query(&params),
            SearchQuery::MatchAll
        );
    }
}
