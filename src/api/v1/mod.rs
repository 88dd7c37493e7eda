//! v1 API endpoints

pub mod films;
pub mod genres;
pub mod persons;

use axum::{Router, routing::get};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/films", get(films::films_list))
        .route("/films/search", get(films::films_search))
        .route("/films/{film_id}", get(films::film_details))
        .route("/genres", get(genres::genres_list))
        .route("/genres/{genre_id}", get(genres::genre_details))
        .route("/persons/search", get(persons::persons_search))
        .route("/persons/{person_id}", get(persons::person_details))
        .route("/persons/{person_id}/film", get(persons::person_films))
}
