//! Search backend trait definition

use std::fmt::Debug;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::query::{Page, SearchQuery, SortOrder};
use crate::domain::DomainError;

/// One page of raw search hits plus the backend's full match count
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Total number of matching documents across all pages
    pub total: u64,
    /// Document sources for this page, in backend order
    pub hits: Vec<Value>,
}

/// Opaque capability over a document search index
///
/// Adapters own translation of [`SearchQuery`] into the backend's query
/// language, including nested-array containment. Backend failures surface
/// as [`DomainError::SearchBackend`]; a missing document is `None`, not an
/// error. Timeouts and retries are adapter concerns.
#[async_trait]
pub trait SearchBackend: Send + Sync + Debug {
    /// Point lookup of a document by id
    async fn get_document(&self, collection: &str, id: &str)
    -> Result<Option<Value>, DomainError>;

    /// Structured query with optional sort and pagination
    async fn search(
        &self,
        collection: &str,
        query: &SearchQuery,
        sort: Option<SortOrder>,
        page: Page,
    ) -> Result<SearchPage, DomainError>;
}

/// Extension trait providing typed document access
pub trait SearchBackendExt: SearchBackend {
    /// Point lookup deserialized into a domain type
    fn get_typed<'a, T>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<T>, DomainError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            match self.get_document(collection, id).await? {
                Some(doc) => {
                    let value: T = serde_json::from_value(doc).map_err(|e| {
                        DomainError::search_backend(format!(
                            "Malformed document in '{}': {}",
                            collection, e
                        ))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Search with hits deserialized into a domain type
    fn search_typed<'a, T>(
        &'a self,
        collection: &'a str,
        query: &'a SearchQuery,
        sort: Option<SortOrder>,
        page: Page,
    ) -> impl std::future::Future<Output = Result<(u64, Vec<T>), DomainError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            let result = self.search(collection, query, sort, page).await?;
            let mut items = Vec::with_capacity(result.hits.len());

            for hit in result.hits {
                let item: T = serde_json::from_value(hit).map_err(|e| {
                    DomainError::search_backend(format!(
                        "Malformed document in '{}': {}",
                        collection, e
                    ))
                })?;
                items.push(item);
            }

            Ok((result.total, items))
        }
    }
}

// Blanket implementation for all types implementing SearchBackend
impl<T: SearchBackend + ?Sized> SearchBackendExt for T {}
