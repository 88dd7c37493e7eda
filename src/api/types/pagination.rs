//! Pagination query parameters and response wrapper
//!
//! Page parameters are inlined into each query struct rather than
//! flattened; serde_urlencoded cannot drive numeric fields through
//! `#[serde(flatten)]`.

use serde::Serialize;

use crate::domain::film::Paginated;
use crate::domain::search::Page;

pub(crate) fn default_page_size() -> u32 {
    Page::DEFAULT_SIZE
}

pub(crate) fn default_page_number() -> i64 {
    1
}

/// Clamps a possibly negative page number into `Page`'s domain, where
/// zero and below all resolve to the first page's offset
pub(crate) fn clamp_page_number(number: i64) -> u32 {
    number.clamp(0, i64::from(u32::MAX)) as u32
}

/// `{total, results}` response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub total: u64,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Maps a domain result page into response items
    pub fn from_domain<D>(page: Paginated<D>, map: impl Fn(&D) -> T) -> Self {
        Self {
            total: page.total,
            results: page.results.iter().map(map).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_maps_items() {
        let page = Paginated::new(7, vec![1, 2, 3]);
        let response = PaginatedResponse::from_domain(page, |n| n * 10);

        assert_eq!(response.total, 7);
        assert_eq!(response.results, vec![10, 20, 30]);
    }

    #[test]
    fn test_paginated_response_shape() {
        let response = PaginatedResponse {
            total: 1,
            results: vec!["a"],
        };
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, "{\"total\":1,\"results\":[\"a\"]}");
    }
}
