//! Elasticsearch search backend over the REST API

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::DomainError;
use crate::domain::search::{Page, SearchBackend, SearchPage, SearchQuery, SortOrder};

/// Configuration for the Elasticsearch backend
#[derive(Debug, Clone)]
pub struct ElasticsearchConfig {
    /// Base URL (e.g., "http://127.0.0.1:9200")
    pub url: String,
    /// Request timeout
    pub timeout: std::time::Duration,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:9200".to_string(),
            timeout: std::time::Duration::from_secs(10),
        }
    }
}

impl ElasticsearchConfig {
    /// Creates a new configuration with the given base URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Search backend talking to an Elasticsearch cluster
///
/// Collections map to index names. Connection failures and non-2xx
/// responses (other than a 404 point lookup) surface as
/// [`DomainError::SearchBackend`].
#[derive(Debug, Clone)]
pub struct ElasticsearchBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ElasticsearchBackend {
    /// Creates a new backend from configuration
    pub fn new(config: ElasticsearchConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::search_backend(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a backend with default configuration for the given URL
    pub fn with_url(url: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(ElasticsearchConfig::new(url))
    }

    fn doc_url(&self, index: &str, id: &str) -> String {
        format!("{}/{}/_doc/{}", self.base_url, index, id)
    }

    fn search_url(&self, index: &str) -> String {
        format!("{}/{}/_search", self.base_url, index)
    }

    /// Translates a query predicate tree into the Elasticsearch DSL
    fn translate_query(query: &SearchQuery) -> Value {
        match query {
            SearchQuery::MatchAll => json!({"match_all": {}}),
            SearchQuery::NestedContains { path, field, value } => json!({
                "nested": {
                    "path": path,
                    "query": {
                        "bool": {
                            "must": {"term": {(format!("{}.{}", path, field)): value}}
                        }
                    }
                }
            }),
            SearchQuery::Contains { path, value } => json!({"term": {(path.as_str()): value}}),
            SearchQuery::Text { fields, value } => json!({
                "multi_match": {"query": value, "fields": fields}
            }),
            SearchQuery::And(clauses) => json!({
                "bool": {"must": clauses.iter().map(Self::translate_query).collect::<Vec<_>>()}
            }),
            SearchQuery::Or(clauses) => json!({
                "bool": {
                    "should": clauses.iter().map(Self::translate_query).collect::<Vec<_>>(),
                    "minimum_should_match": 1
                }
            }),
        }
    }

    fn translate_sort(sort: SortOrder) -> Value {
        match sort {
            SortOrder::RatingAsc => json!([{"rating": {"order": "asc"}}]),
            SortOrder::RatingDesc => json!([{"rating": {"order": "desc"}}]),
        }
    }

    fn build_search_body(query: &SearchQuery, sort: Option<SortOrder>, page: Page) -> Value {
        let mut body = json!({
            "query": Self::translate_query(query),
            "size": page.size,
            "from": page.offset(),
        });

        if let Some(sort) = sort {
            body["sort"] = Self::translate_sort(sort);
        }

        body
    }

    fn parse_search_response(index: &str, body: Value) -> Result<SearchPage, DomainError> {
        let hits_obj = body.get("hits").ok_or_else(|| {
            DomainError::search_backend(format!("Malformed search response from '{}'", index))
        })?;

        let total = hits_obj
            .pointer("/total/value")
            .and_then(Value::as_u64)
            .unwrap_or(0);

        let hits = hits_obj
            .get("hits")
            .and_then(Value::as_array)
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("_source").cloned())
                    .collect()
            })
            .unwrap_or_default();

        Ok(SearchPage { total, hits })
    }
}

#[async_trait]
impl SearchBackend for ElasticsearchBackend {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Value>, DomainError> {
        let response = self
            .client
            .get(self.doc_url(collection, id))
            .send()
            .await
            .map_err(|e| {
                DomainError::search_backend(format!("Request to '{}' failed: {}", collection, e))
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::search_backend(format!(
                "HTTP {} from '{}': {}",
                status, collection, error_body
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            DomainError::search_backend(format!("Failed to parse response: {}", e))
        })?;

        Ok(body.get("_source").cloned())
    }

    async fn search(
        &self,
        collection: &str,
        query: &SearchQuery,
        sort: Option<SortOrder>,
        page: Page,
    ) -> Result<SearchPage, DomainError> {
        let request_body = Self::build_search_body(query, sort, page);

        let response = self
            .client
            .post(self.search_url(collection))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                DomainError::search_backend(format!("Request to '{}' failed: {}", collection, e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::search_backend(format!(
                "HTTP {} from '{}': {}",
                status, collection, error_body
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            DomainError::search_backend(format!("Failed to parse response: {}", e))
        })?;

        Self::parse_search_response(collection, body)
    }
}
