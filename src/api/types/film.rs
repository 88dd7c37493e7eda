//! Film response models and query parameters

use serde::{Deserialize, Serialize};

use super::pagination::{clamp_page_number, default_page_number, default_page_size};
use crate::domain::film::{Film, PersonRef};
use crate::domain::search::Page;

/// Full film detail
#[derive(Debug, Clone, Serialize)]
pub struct ApiFilm {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rating: f64,
    pub genres: Vec<String>,
    pub actors: Vec<ApiPersonRef>,
    pub writers: Vec<ApiPersonRef>,
    pub directors: Vec<ApiPersonRef>,
}

/// Person reference on a film's role list
#[derive(Debug, Clone, Serialize)]
pub struct ApiPersonRef {
    pub id: String,
    pub name: String,
}

impl From<&PersonRef> for ApiPersonRef {
    fn from(person: &PersonRef) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
        }
    }
}

impl ApiFilm {
    pub fn from_domain(film: &Film) -> Self {
        Self {
            id: film.id.clone(),
            title: film.title.clone(),
            description: film.description.clone(),
            rating: film.rating,
            genres: film.categories.clone(),
            actors: film.actors.iter().map(ApiPersonRef::from).collect(),
            writers: film.writers.iter().map(ApiPersonRef::from).collect(),
            directors: film.directors.iter().map(ApiPersonRef::from).collect(),
        }
    }
}

/// Compact film representation for listings
#[derive(Debug, Clone, Serialize)]
pub struct ApiFilmListItem {
    pub id: String,
    pub title: String,
    pub rating: f64,
}

impl ApiFilmListItem {
    pub fn from_domain(film: &Film) -> Self {
        Self {
            id: film.id.clone(),
            title: film.title.clone(),
            rating: film.rating,
        }
    }
}

/// Query parameters for the filtered film listing
#[derive(Debug, Clone, Deserialize)]
pub struct ListFilmsQuery {
    pub sort: Option<String>,
    #[serde(rename = "filter[genre]")]
    pub genre: Option<String>,
    #[serde(rename = "filter[person]")]
    pub person: Option<String>,
    #[serde(rename = "page[size]", default = "default_page_size")]
    pub page_size: u32,
    #[serde(rename = "page[number]", default = "default_page_number")]
    pub page_number: i64,
}

impl ListFilmsQuery {
    pub fn page(&self) -> Page {
        Page::new(self.page_size, clamp_page_number(self.page_number))
    }
}

/// Query parameters for free-text search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQueryParams {
    pub query: Option<String>,
    #[serde(rename = "page[size]", default = "default_page_size")]
    pub page_size: u32,
    #[serde(rename = "page[number]", default = "default_page_number")]
    pub page_number: i64,
}

impl SearchQueryParams {
    pub fn page(&self) -> Page {
        Page::new(self.page_size, clamp_page_number(self.page_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_film_from_domain() {
        let film: Film = serde_json::from_value(json!({
            "id": "f1",
            "title": "X",
            "rating": 7.5,
            "categories": ["g1"],
            "actors": [{"id": "p1", "name": "A"}]
        }))
        .unwrap();

        let api = ApiFilm::from_domain(&film);
        let rendered = serde_json::to_value(&api).unwrap();

        assert_eq!(rendered["id"], "f1");
        assert_eq!(rendered["rating"], 7.5);
        assert_eq!(rendered["genres"], json!(["g1"]));
        assert_eq!(rendered["actors"][0]["name"], "A");
        // Absent description is omitted, empty role lists are not
        assert!(rendered.get("description").is_none());
        assert_eq!(rendered["writers"], json!([]));
    }

    #[test]
    fn test_list_query_bracket_aliases() {
        let query: ListFilmsQuery = serde_json::from_value(json!({
            "filter[genre]": "g1",
            "filter[person]": "p1",
            "sort": "-rating"
        }))
        .unwrap();

        assert_eq!(query.genre.as_deref(), Some("g1"));
        assert_eq!(query.person.as_deref(), Some("p1"));
        assert_eq!(query.sort.as_deref(), Some("-rating"));
        assert_eq!(query.page(), Page::new(50, 1));
    }

    #[test]
    fn test_negative_page_number_clamps_to_first_page() {
        let query: ListFilmsQuery = serde_json::from_value(json!({
            "page[number]": -3
        }))
        .unwrap();

        assert_eq!(query.page().offset(), 0);

        let params: SearchQueryParams = serde_json::from_value(json!({
            "query": "star",
            "page[number]": -1
        }))
        .unwrap();

        assert_eq!(params.page().offset(), 0);
    }

    #[test]
    fn test_search_params_page() {
        let params: SearchQueryParams = serde_json::from_value(json!({
            "query": "star",
            "page[size]": 10,
            "page[number]": 2
        }))
        .unwrap();

        assert_eq!(params.page().offset(), 10);
    }
}
