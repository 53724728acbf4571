use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::domain::competition::{search, Competition, CompetitionId, SeasonId};

const FETCHED: &str = "Successfully fetched competitions.";

/// Query string for competition search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// List every competition season
///
/// GET /api/v1/statistics/competitions
pub async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Competition>>>, ApiError> {
    let competitions = state.competitions.list_all().await?;

    Ok(Json(ApiResponse::success(FETCHED, competitions)))
}

/// Search competitions by country, competition or season name
///
/// GET /api/v1/statistics/competitions/search?q=
pub async fn search_competitions(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Competition>>>, ApiError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter \"q\" is required."))?;

    let competitions = state.competitions.list_all().await?;
    let found = search(competitions, query);
    tracing::debug!(query, hits = found.len(), "Competition search");

    Ok(Json(ApiResponse::success(FETCHED, found)))
}

/// Get one competition season
///
/// GET /api/v1/statistics/competitions/:competition_id/:season_id
pub async fn get_competition(
    State(state): State<AppState>,
    Path((competition_id, season_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Competition>>, ApiError> {
    let (Ok(competition_id), Ok(season_id)) = (
        competition_id.parse::<CompetitionId>(),
        season_id.parse::<SeasonId>(),
    ) else {
        return Err(ApiError::bad_request(
            "competitionId and seasonId must be numeric.",
        ));
    };

    let competition = state
        .competitions
        .find(competition_id, season_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Competition not found."))?;

    Ok(Json(ApiResponse::success(
        "Successfully fetched competition.",
        competition,
    )))
}
