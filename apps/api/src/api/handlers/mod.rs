// HTTP handlers, one module per resource

pub mod competitions;
pub mod fixtures;
pub mod health;
pub mod lineups;
pub mod standings;

use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::domain::competition::{CompetitionId, SeasonId};

/// `?competitionId=&seasonId=` query string shared by season endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonQuery {
    pub competition_id: Option<String>,
    pub season_id: Option<String>,
}

impl SeasonQuery {
    /// Both ids, or the 400 the season endpoints answer with
    pub fn ids(&self) -> Result<(CompetitionId, SeasonId), ApiError> {
        let (Some(competition_id), Some(season_id)) = (
            non_blank(&self.competition_id),
            non_blank(&self.season_id),
        ) else {
            return Err(ApiError::bad_request(
                "competitionId and seasonId are required query parameters.",
            ));
        };

        match (
            competition_id.parse::<CompetitionId>(),
            season_id.parse::<SeasonId>(),
        ) {
            (Ok(competition_id), Ok(season_id)) => Ok((competition_id, season_id)),
            _ => Err(ApiError::bad_request(
                "competitionId and seasonId must be numeric.",
            )),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
