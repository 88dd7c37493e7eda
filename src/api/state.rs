//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{FilmService, GenreService, PersonService};

/// Shared service handles, constructed once at process start
///
/// One instance per domain service, bound to the shared cache and search
/// adapter handles and passed explicitly through the router.
#[derive(Clone)]
pub struct AppState {
    pub film_service: Arc<FilmService>,
    pub genre_service: Arc<GenreService>,
    pub person_service: Arc<PersonService>,
}

impl AppState {
    pub fn new(
        film_service: Arc<FilmService>,
        genre_service: Arc<GenreService>,
        person_service: Arc<PersonService>,
    ) -> Self {
        Self {
            film_service,
            genre_service,
            person_service,
        }
    }
}
