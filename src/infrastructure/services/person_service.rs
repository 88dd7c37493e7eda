//! Person read service with cross-document role aggregation

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::cache_aside::CacheAside;
use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKeyParams};
use crate::domain::film::{Film, Paginated};
use crate::domain::person::{FilmSummary, Person, PersonWithFilms, Role};
use crate::domain::search::{Page, SearchBackend, SearchBackendExt, SearchQuery};

/// Configuration for the person service
#[derive(Debug, Clone)]
pub struct PersonServiceConfig {
    /// Search collection holding person documents
    pub people_collection: String,
    /// Search collection holding film documents (for role scans)
    pub films_collection: String,
    /// Cache TTL for person entries and search pages
    pub ttl: Duration,
    /// Page size used for the per-person film membership query
    pub role_scan_size: u32,
}

impl Default for PersonServiceConfig {
    fn default() -> Self {
        Self {
            people_collection: "people".to_string(),
            films_collection: "films".to_string(),
            ttl: Duration::from_secs(300),
            role_scan_size: 1000,
        }
    }
}

/// Read service for the people collection
///
/// Every read is a two-step backend interaction: the person document
/// itself, then a membership query over films to derive role groups.
#[derive(Debug)]
pub struct PersonService {
    search: Arc<dyn SearchBackend>,
    engine: CacheAside,
    config: PersonServiceConfig,
}

impl PersonService {
    pub fn new(cache: Arc<dyn Cache>, search: Arc<dyn SearchBackend>) -> Self {
        Self::with_config(cache, search, PersonServiceConfig::default())
    }

    pub fn with_config(
        cache: Arc<dyn Cache>,
        search: Arc<dyn SearchBackend>,
        config: PersonServiceConfig,
    ) -> Self {
        Self {
            search,
            engine: CacheAside::new(cache, "person", config.ttl),
            config,
        }
    }

    /// Fetches a person with their films grouped by role
    ///
    /// `None` when the person document is absent; no partial result is
    /// produced if the name lookup fails after films were found.
    pub async fn get_by_id(&self, person_id: &str) -> Result<Option<PersonWithFilms>, DomainError> {
        let key = self.engine.key(&CacheKeyParams::new(person_id));

        self.engine
            .get_or_fetch(&key, || async {
                let Some(person) = self.fetch_person(person_id).await? else {
                    return Ok(None);
                };

                let films = self.films_for_person(person_id).await?;
                Ok(Some(PersonWithFilms::aggregate(person, &films)))
            })
            .await
    }

    /// Free-text person search by display name, with role aggregation
    /// performed for every candidate on the page
    pub async fn search(
        &self,
        query_text: &str,
        page: Page,
    ) -> Result<Option<Paginated<PersonWithFilms>>, DomainError> {
        let key_params = CacheKeyParams::new("search")
            .with_component("query", query_text)
            .with_component("page_size", page.size.to_string())
            .with_component("page_number", page.number.to_string());
        let key = self.engine.hashed_key(&key_params);

        self.engine
            .get_or_fetch(&key, || async {
                debug!(query = %query_text, "searching people");
                let query = SearchQuery::text(vec!["full_name"], query_text);
                let (total, candidates) = self
                    .search
                    .search_typed::<Person>(&self.config.people_collection, &query, None, page)
                    .await?;

                if candidates.is_empty() {
                    return Ok(None);
                }

                let mut results = Vec::with_capacity(candidates.len());

                for person in candidates {
                    let films = self.films_for_person(&person.id).await?;
                    results.push(PersonWithFilms::aggregate(person, &films));
                }

                Ok(Some(Paginated::new(total, results)))
            })
            .await
    }

    /// Hydrated film summaries for a person, deduplicated across roles
    ///
    /// A film the person holds several roles in appears exactly once,
    /// in first-seen role order.
    pub async fn film_detail_by_person(
        &self,
        person_id: &str,
    ) -> Result<Option<Vec<FilmSummary>>, DomainError> {
        let key = self.engine.key(
            &CacheKeyParams::new(person_id).with_component("view", "film_detail"),
        );

        self.engine
            .get_or_fetch(&key, || async {
                if self.fetch_person(person_id).await?.is_none() {
                    return Ok(None);
                }

                let films = self.films_for_person(person_id).await?;
                let mut seen = HashSet::new();
                let mut summaries = Vec::new();

                for role in Role::ALL {
                    for film in &films {
                        if role.member_ids(film).any(|id| id == person_id)
                            && seen.insert(film.id.clone())
                        {
                            summaries.push(FilmSummary::from(film));
                        }
                    }
                }

                Ok(Some(summaries))
            })
            .await
    }

    async fn fetch_person(&self, person_id: &str) -> Result<Option<Person>, DomainError> {
        debug!(person_id = %person_id, "fetching person from search backend");
        self.search
            .get_typed::<Person>(&self.config.people_collection, person_id)
            .await
    }

    /// Every film where the person appears in any role array; the
    /// containment predicate runs in the backend, not here
    async fn films_for_person(&self, person_id: &str) -> Result<Vec<Film>, DomainError> {
        let query = SearchQuery::Or(
            Role::ALL
                .iter()
                .map(|role| SearchQuery::nested_contains(role.film_field(), "id", person_id))
                .collect(),
        );

        let (_, films) = self
            .search
            .search_typed::<Film>(
                &self.config.films_collection,
                &query,
                None,
                Page::new(self.config.role_scan_size, 1),
            )
            .await?;

        Ok(films)
    }
}
