//! Person endpoint handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ApiFilmSummary, ApiPerson, PaginatedResponse, SearchQueryParams,
};

/// GET /api/v1/persons/{person_id}
pub async fn person_details(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<ApiPerson>, ApiError> {
    debug!(person_id = %person_id, "getting person");

    let person = state
        .person_service
        .get_by_id(&person_id)
        .await?
        .ok_or_else(|| ApiError::not_found("person not found"))?;

    Ok(Json(ApiPerson::from_domain(&person)))
}

/// GET /api/v1/persons/search
pub async fn persons_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<PaginatedResponse<ApiPerson>>, ApiError> {
    let query_text = params
        .query
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("query parameter is required"))?;

    debug!(query = %query_text, "searching persons");

    let page = state
        .person_service
        .search(query_text, params.page())
        .await?
        .ok_or_else(|| ApiError::not_found("persons not found"))?;

    Ok(Json(PaginatedResponse::from_domain(
        page,
        ApiPerson::from_domain,
    )))
}

/// GET /api/v1/persons/{person_id}/film
pub async fn person_films(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<Vec<ApiFilmSummary>>, ApiError> {
    debug!(person_id = %person_id, "getting films by person");

    let films = state
        .person_service
        .film_detail_by_person(&person_id)
        .await?
        .ok_or_else(|| ApiError::not_found("person not found"))?;

    Ok(Json(films.iter().map(ApiFilmSummary::from_domain).collect()))
}
