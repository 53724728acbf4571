use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::domain::fixture::MatchId;
use crate::domain::lineup::{Booking, LineupPlayer, PositionSpell, TeamLineup};

/// Query string for the lineup endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupQuery {
    pub match_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub position: String,
    pub from: String,
    pub to: Option<String>,
    pub from_period: u32,
    pub to_period: Option<u32>,
    pub start_reason: String,
    pub end_reason: Option<String>,
}

impl From<&PositionSpell> for PositionResponse {
    fn from(spell: &PositionSpell) -> Self {
        Self {
            position: spell.position.clone(),
            from: spell.from.clone(),
            to: spell.to.clone(),
            from_period: spell.from_period,
            to_period: spell.to_period,
            start_reason: spell.start_reason.clone(),
            end_reason: spell.end_reason.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardResponse {
    #[serde(rename = "type")]
    pub card_type: String,
    pub reason: String,
    pub time: String,
    pub period: u32,
}

impl From<&Booking> for CardResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            card_type: booking.card_type.clone(),
            reason: booking.reason.clone(),
            time: booking.time.clone(),
            period: booking.period,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player_id: u32,
    pub player_name: String,
    pub nickname: Option<String>,
    pub jersey_number: u32,
    pub country: String,
    pub positions: Vec<PositionResponse>,
    pub cards: Vec<CardResponse>,
}

impl From<&LineupPlayer> for PlayerResponse {
    fn from(player: &LineupPlayer) -> Self {
        Self {
            player_id: player.player_id,
            player_name: player.player_name.clone(),
            nickname: player.nickname().map(String::from),
            jersey_number: player.jersey_number,
            country: player.country_name().unwrap_or("Unknown").to_string(),
            positions: player.positions.iter().map(PositionResponse::from).collect(),
            cards: player.cards.iter().map(CardResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupResponse {
    pub team_id: u32,
    pub team_name: String,
    pub lineup: Vec<PlayerResponse>,
}

impl From<&TeamLineup> for LineupResponse {
    fn from(team: &TeamLineup) -> Self {
        Self {
            team_id: team.team_id,
            team_name: team.team_name.clone(),
            lineup: team.lineup.iter().map(PlayerResponse::from).collect(),
        }
    }
}

/// Both teams' lineups for a match
///
/// GET /api/v1/statistics/competitions/lineup?matchId=
pub async fn get_lineup(
    State(state): State<AppState>,
    Query(params): Query<LineupQuery>,
) -> Result<Json<ApiResponse<Vec<LineupResponse>>>, ApiError> {
    let raw_id = params
        .match_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("matchId is a required query parameter."))?;

    let match_id: MatchId = raw_id
        .parse()
        .map_err(|_| ApiError::bad_request("matchId must be numeric."))?;

    let lineups = state
        .lineups
        .find_by_match(match_id)
        .await
        .map_err(|e| ApiError::data_source(e, "Could not read lineup data file."))?;

    let response = lineups.iter().map(LineupResponse::from).collect();

    Ok(Json(ApiResponse::success(
        "Successfully fetched lineup data.",
        response,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lineup::Country;

    #[test]
    fn player_mapping_fills_defaults() {
        let player = LineupPlayer {
            player_id: 1,
            player_name: "Test Player".to_string(),
            player_nickname: Some(" ".to_string()),
            jersey_number: 9,
            country: None,
            positions: vec![],
            cards: vec![Booking {
                time: "12:00".to_string(),
                card_type: "Yellow Card".to_string(),
                reason: "Foul Committed".to_string(),
                period: 1,
            }],
        };

        let json = serde_json::to_value(PlayerResponse::from(&player)).unwrap();
        assert_eq!(json["nickname"], serde_json::Value::Null);
        assert_eq!(json["country"], "Unknown");
        assert_eq!(json["jerseyNumber"], 9);
        assert_eq!(json["cards"][0]["type"], "Yellow Card");
    }

    #[test]
    fn player_mapping_keeps_country_and_nickname() {
        let player = LineupPlayer {
            player_id: 2,
            player_name: "Lionel Andrés Messi Cuccittini".to_string(),
            player_nickname: Some("Lionel Messi".to_string()),
            jersey_number: 10,
            country: Some(Country {
                id: Some(11),
                name: "Argentina".to_string(),
            }),
            positions: vec![],
            cards: vec![],
        };

        let response = PlayerResponse::from(&player);
        assert_eq!(response.nickname.as_deref(), Some("Lionel Messi"));
        assert_eq!(response.country, "Argentina");
    }
}
