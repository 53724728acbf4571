use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::SeasonQuery;
use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::domain::fixture::played_results;
use crate::domain::standings::{compute_standings, TeamStanding};

/// One league table row, in the abbreviated column names the dashboard uses
#[derive(Debug, Serialize)]
pub struct StandingResponse {
    pub team: String,
    #[serde(rename = "MP")]
    pub played: u64,
    #[serde(rename = "W")]
    pub won: u32,
    #[serde(rename = "D")]
    pub drawn: u32,
    #[serde(rename = "L")]
    pub lost: u32,
    #[serde(rename = "GF")]
    pub goals_for: u64,
    #[serde(rename = "GA")]
    pub goals_against: u64,
    #[serde(rename = "GD")]
    pub goal_difference: i128,
    #[serde(rename = "Pts")]
    pub points: u64,
}

impl From<&TeamStanding> for StandingResponse {
    fn from(standing: &TeamStanding) -> Self {
        Self {
            team: standing.team().to_string(),
            played: standing.played(),
            won: standing.won(),
            drawn: standing.drawn(),
            lost: standing.lost(),
            goals_for: standing.goals_for(),
            goals_against: standing.goals_against(),
            goal_difference: standing.goal_difference(),
            points: standing.points(),
        }
    }
}

/// League table for a competition season
///
/// GET /api/v1/statistics/competitions/standings?competitionId=&seasonId=
pub async fn get_standings(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<ApiResponse<Vec<StandingResponse>>>, ApiError> {
    let (competition_id, season_id) = params.ids()?;

    let fixtures = state
        .fixtures
        .find_by_season(competition_id, season_id)
        .await?;
    let results = played_results(&fixtures)?;

    let table = compute_standings(&results);
    tracing::debug!(
        %competition_id,
        %season_id,
        matches = results.len(),
        teams = table.len(),
        "Computed standings"
    );

    let rows = table.iter().map(StandingResponse::from).collect();

    Ok(Json(ApiResponse::success(
        "Successfully calculated league standings.",
        rows,
    )))
}
