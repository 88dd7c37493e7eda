//! Genre endpoint handlers

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiGenre};

/// GET /api/v1/genres/{genre_id}
pub async fn genre_details(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> Result<Json<ApiGenre>, ApiError> {
    debug!(genre_id = %genre_id, "getting genre");

    let genre = state
        .genre_service
        .get_by_id(&genre_id)
        .await?
        .ok_or_else(|| ApiError::not_found("genre not found"))?;

    Ok(Json(ApiGenre::from_domain(&genre)))
}

/// GET /api/v1/genres
pub async fn genres_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApiGenre>>, ApiError> {
    debug!("listing genres");

    let genres = state.genre_service.list().await?;

    Ok(Json(genres.iter().map(ApiGenre::from_domain).collect()))
}
