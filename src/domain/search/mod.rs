//! Search domain - opaque capability over a document search index

mod backend;
mod query;

pub use backend::{SearchBackend, SearchBackendExt, SearchPage};
pub use query::{Page, SearchQuery, SortOrder};

#[cfg(test)]
pub use backend::mock::MockSearchBackend;
