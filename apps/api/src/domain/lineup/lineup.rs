use serde::{Deserialize, Serialize};

/// One team's lineup for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLineup {
    pub team_id: u32,
    pub team_name: String,
    #[serde(default)]
    pub lineup: Vec<LineupPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
}

/// A player named in a team's lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub player_id: u32,
    pub player_name: String,
    #[serde(default)]
    pub player_nickname: Option<String>,
    pub jersey_number: u32,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub positions: Vec<PositionSpell>,
    #[serde(default)]
    pub cards: Vec<Booking>,
}

impl LineupPlayer {
    /// Nickname, with blank values treated as absent
    pub fn nickname(&self) -> Option<&str> {
        self.player_nickname
            .as_deref()
            .filter(|nickname| !nickname.trim().is_empty())
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().map(|c| c.name.as_str())
    }
}

/// A stretch of the match a player spent in one position
///
/// `to` and `to_period` are absent when the player finished the match there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSpell {
    pub position: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    pub from_period: u32,
    #[serde(default)]
    pub to_period: Option<u32>,
    pub start_reason: String,
    #[serde(default)]
    pub end_reason: Option<String>,
}

/// A card shown to a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub time: String,
    pub card_type: String,
    pub reason: String,
    pub period: u32,
}
