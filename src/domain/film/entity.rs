//! Film entity and related types

use serde::{Deserialize, Serialize};

/// Denormalized person sub-record carried on a film's role arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
}

/// A film document as stored in the search index
///
/// Role arrays and category references default to empty, never null;
/// rating defaults to zero when absent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub rating: f64,

    /// Genre ids this film belongs to
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub actors: Vec<PersonRef>,

    #[serde(default)]
    pub writers: Vec<PersonRef>,

    #[serde(default)]
    pub directors: Vec<PersonRef>,
}

/// One page of results with the backend's full match count
///
/// `total` reflects every matching document, not the page length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub total: u64,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(total: u64, results: Vec<T>) -> Self {
        Self { total, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_film_defaults_for_absent_fields() {
        let film: Film = serde_json::from_value(json!({
            "id": "f1",
            "title": "Alpha"
        }))
        .unwrap();

        assert_eq!(film.rating, 0.0);
        assert!(film.description.is_none());
        assert!(film.categories.is_empty());
        assert!(film.actors.is_empty());
        assert!(film.writers.is_empty());
        assert!(film.directors.is_empty());
    }

    #[test]
    fn test_film_from_index_document() {
        let film: Film = serde_json::from_value(json!({
            "id": "f1",
            "title": "Alpha",
            "description": "A film",
            "rating": 7.5,
            "categories": ["g1", "g2"],
            "actors": [{"id": "p1", "name": "A"}],
            "writers": [],
            "directors": [{"id": "p2", "name": "B"}]
        }))
        .unwrap();

        assert_eq!(film.rating, 7.5);
        assert_eq!(film.categories.len(), 2);
        assert_eq!(film.actors[0].id, "p1");
        assert_eq!(film.directors[0].name, "B");
    }

    #[test]
    fn test_paginated_round_trip() {
        let page = Paginated::new(42, vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&page).unwrap();
        let back: Paginated<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.total, 42);
        assert_eq!(back.results.len(), 2);
    }
}
