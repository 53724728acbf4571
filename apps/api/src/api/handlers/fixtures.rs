use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use super::SeasonQuery;
use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::domain::competition::{CompetitionId, SeasonId};
use crate::domain::fixture::{Fixture, MatchId};

const UNKNOWN: &str = "Unknown";

/// Fixture summary for the season match list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummaryResponse {
    pub match_id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub date: NaiveDate,
}

impl From<&Fixture> for MatchSummaryResponse {
    fn from(fixture: &Fixture) -> Self {
        Self {
            match_id: fixture.match_id,
            home_team: fixture.home_team_name().to_string(),
            away_team: fixture.away_team_name().to_string(),
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            date: fixture.match_date,
        }
    }
}

/// Full match details for the match page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailsResponse {
    pub match_id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub date: NaiveDate,
    pub kick_off: Option<String>,
    pub venue: String,
    pub referee: String,
    pub attendance: Option<u32>,
    pub status: String,
}

impl From<&Fixture> for MatchDetailsResponse {
    fn from(fixture: &Fixture) -> Self {
        Self {
            match_id: fixture.match_id,
            home_team: fixture.home_team_name().to_string(),
            away_team: fixture.away_team_name().to_string(),
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            date: fixture.match_date,
            kick_off: fixture.kick_off.clone(),
            venue: fixture.venue().unwrap_or(UNKNOWN).to_string(),
            referee: fixture.referee_name().unwrap_or(UNKNOWN).to_string(),
            attendance: fixture.attendance,
            status: fixture
                .match_status
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// List the fixtures of a competition season
///
/// GET /api/v1/statistics/competitions/matches?competitionId=&seasonId=
pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<ApiResponse<Vec<MatchSummaryResponse>>>, ApiError> {
    let (competition_id, season_id) = params.ids()?;

    let fixtures = state
        .fixtures
        .find_by_season(competition_id, season_id)
        .await?;

    let summaries = fixtures.iter().map(MatchSummaryResponse::from).collect();

    Ok(Json(ApiResponse::success(
        "Successfully fetched match data.",
        summaries,
    )))
}

/// Get one match of a competition season
///
/// GET /api/v1/statistics/competitions/matches/:competition_id/:season_id/:match_id
pub async fn get_match(
    State(state): State<AppState>,
    Path((competition_id, season_id, match_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<MatchDetailsResponse>>, ApiError> {
    let (Ok(competition_id), Ok(season_id), Ok(match_id)) = (
        competition_id.parse::<CompetitionId>(),
        season_id.parse::<SeasonId>(),
        match_id.parse::<MatchId>(),
    ) else {
        return Err(ApiError::bad_request(
            "competitionId, seasonId and matchId must be numeric.",
        ));
    };

    let fixture = state
        .fixtures
        .find_match(competition_id, season_id, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match not found."))?;

    Ok(Json(ApiResponse::success(
        "Successfully fetched match details.",
        MatchDetailsResponse::from(&fixture),
    )))
}
