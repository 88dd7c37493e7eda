//! Search infrastructure - Elasticsearch backend

mod elasticsearch;

pub use elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
