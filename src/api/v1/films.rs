//! Film endpoint handlers

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ApiFilm, ApiFilmListItem, ListFilmsQuery, PaginatedResponse, SearchQueryParams,
};
use crate::domain::search::SortOrder;
use crate::infrastructure::services::ListFilmsParams;

/// GET /api/v1/films/{film_id}
pub async fn film_details(
    State(state): State<AppState>,
    Path(film_id): Path<String>,
) -> Result<Json<ApiFilm>, ApiError> {
    debug!(film_id = %film_id, "getting film");

    let film = state
        .film_service
        .get_by_id(&film_id)
        .await?
        .ok_or_else(|| ApiError::not_found("film not found"))?;

    Ok(Json(ApiFilm::from_domain(&film)))
}

/// GET /api/v1/films
pub async fn films_list(
    State(state): State<AppState>,
    Query(query): Query<ListFilmsQuery>,
) -> Result<Json<PaginatedResponse<ApiFilmListItem>>, ApiError> {
    debug!(?query, "listing films");

    let sort = query
        .sort
        .as_deref()
        .map(SortOrder::from_str)
        .transpose()?;

    let params = ListFilmsParams {
        genre: query.genre.clone(),
        person: query.person.clone(),
        sort,
        page: query.page(),
    };

    let page = state
        .film_service
        .list(&params)
        .await?
        .ok_or_else(|| ApiError::not_found("films not found"))?;

    Ok(Json(PaginatedResponse::from_domain(
        page,
        ApiFilmListItem::from_domain,
    )))
}

/// GET /api/v1/films/search
pub async fn films_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<PaginatedResponse<ApiFilmListItem>>, ApiError> {
    let query_text = params
        .query
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("query parameter is required"))?;

    debug!(query = %query_text, "searching films");

    let page = state
        .film_service
        .search(query_text, params.page())
        .await?
        .ok_or_else(|| ApiError::not_found("films not found"))?;

    Ok(Json(PaginatedResponse::from_domain(
        page,
        ApiFilmListItem::from_domain,
    )))
}
