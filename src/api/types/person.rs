//! Person response models

use serde::Serialize;

use crate::domain::person::{FilmSummary, PersonWithFilms, Role};

#[derive(Debug, Clone, Serialize)]
pub struct ApiPerson {
    pub id: String,
    pub full_name: String,
    pub roles: Vec<ApiRoleFilms>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiRoleFilms {
    pub role: Role,
    pub film_ids: Vec<String>,
}

impl ApiPerson {
    pub fn from_domain(person: &PersonWithFilms) -> Self {
        Self {
            id: person.id.clone(),
            full_name: person.full_name.clone(),
            roles: person
                .roles
                .iter()
                .map(|r| ApiRoleFilms {
                    role: r.role,
                    film_ids: r.film_ids.clone(),
                })
                .collect(),
        }
    }
}

/// Hydrated film summary on the person film-detail endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ApiFilmSummary {
    pub id: String,
    pub title: String,
    pub rating: f64,
}

impl ApiFilmSummary {
    pub fn from_domain(summary: &FilmSummary) -> Self {
        Self {
            id: summary.id.clone(),
            title: summary.title.clone(),
            rating: summary.rating,
        }
    }
}
