use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ids::MatchId;

/// Home side of a fixture as stored in the season document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeTeam {
    #[serde(default)]
    pub home_team_id: Option<u32>,
    pub home_team_name: String,
}

/// Away side of a fixture as stored in the season document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwayTeam {
    #[serde(default)]
    pub away_team_id: Option<u32>,
    pub away_team_name: String,
}

/// Any `{ "id": .., "name": .. }` reference (stadium, referee)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
}

/// One match from `matches/<competition>/<season>.json`
///
/// Scores are kept signed and optional exactly as the document has them;
/// `validation::played_results` is the only way they reach the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub match_id: MatchId,
    pub match_date: NaiveDate,
    #[serde(default)]
    pub kick_off: Option<String>,
    pub home_team: HomeTeam,
    pub away_team: AwayTeam,
    #[serde(default)]
    pub home_score: Option<i64>,
    #[serde(default)]
    pub away_score: Option<i64>,
    #[serde(default)]
    pub match_status: Option<String>,
    #[serde(default)]
    pub stadium: Option<NamedRef>,
    #[serde(default)]
    pub referee: Option<NamedRef>,
    #[serde(default)]
    pub attendance: Option<u32>,
}

impl Fixture {
    pub fn home_team_name(&self) -> &str {
        &self.home_team.home_team_name
    }

    pub fn away_team_name(&self) -> &str {
        &self.away_team.away_team_name
    }

    pub fn venue(&self) -> Option<&str> {
        self.stadium.as_ref().map(|s| s.name.as_str())
    }

    pub fn referee_name(&self) -> Option<&str> {
        self.referee.as_ref().map(|r| r.name.as_str())
    }

    /// A fixture counts as played once both scores are recorded
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}
