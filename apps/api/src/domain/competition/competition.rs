use serde::{Deserialize, Serialize};

use crate::domain::ids::{CompetitionId, SeasonId};

/// One season of one competition, as listed in `competitions.json`
///
/// Serialized back to clients in the same snake_case shape it is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub competition_id: CompetitionId,
    pub season_id: SeasonId,
    pub country_name: String,
    pub competition_name: String,
    pub competition_gender: String,
    pub competition_youth: bool,
    pub competition_international: bool,
    pub season_name: String,
    #[serde(default)]
    pub match_updated: Option<String>,
    #[serde(default)]
    pub match_updated_360: Option<String>,
    #[serde(default)]
    pub match_available_360: Option<String>,
    #[serde(default)]
    pub match_available: Option<String>,
}

impl Competition {
    /// Case-insensitive substring match on country, competition or season name
    ///
    /// `needle` must already be lowercase; see [`search`].
    pub fn matches_query(&self, needle: &str) -> bool {
        [&self.country_name, &self.competition_name, &self.season_name]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Whether this record is the given competition season
    pub fn is(&self, competition_id: CompetitionId, season_id: SeasonId) -> bool {
        self.competition_id == competition_id && self.season_id == season_id
    }
}

/// Filters competitions by a free-text query
pub fn search(competitions: Vec<Competition>, query: &str) -> Vec<Competition> {
    let needle = query.to_lowercase();
    competitions
        .into_iter()
        .filter(|competition| competition.matches_query(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(
        id: u32,
        season: u32,
        country: &str,
        name: &str,
        season_name: &str,
    ) -> Competition {
        Competition {
            competition_id: CompetitionId::new(id),
            season_id: SeasonId::new(season),
            country_name: country.to_string(),
            competition_name: name.to_string(),
            competition_gender: "male".to_string(),
            competition_youth: false,
            competition_international: false,
            season_name: season_name.to_string(),
            match_updated: None,
            match_updated_360: None,
            match_available_360: None,
            match_available: None,
        }
    }

    fn sample() -> Vec<Competition> {
        vec![
            competition(2, 27, "England", "Premier League", "2015/2016"),
            competition(11, 90, "Spain", "La Liga", "2020/2021"),
            competition(43, 3, "International", "FIFA World Cup", "2018"),
        ]
    }

    #[test]
    fn search_matches_competition_name_ignoring_case() {
        let found = search(sample(), "premier");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].competition_name, "Premier League");
    }

    #[test]
    fn search_matches_country() {
        let found = search(sample(), "SPAIN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].competition_id, CompetitionId::new(11));
    }

    #[test]
    fn search_matches_season_name() {
        let found = search(sample(), "2018");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].season_id, SeasonId::new(3));
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        assert!(search(sample(), "bundesliga").is_empty());
    }

    #[test]
    fn is_checks_both_ids() {
        let wc = &sample()[2];
        assert!(wc.is(CompetitionId::new(43), SeasonId::new(3)));
        assert!(!wc.is(CompetitionId::new(43), SeasonId::new(106)));
    }

    #[test]
    fn deserializes_without_optional_timestamps() {
        let json = r#"{
            "competition_id": 9,
            "season_id": 281,
            "country_name": "Germany",
            "competition_name": "1. Bundesliga",
            "competition_gender": "male",
            "competition_youth": false,
            "competition_international": false,
            "season_name": "2023/2024",
            "match_updated": null
        }"#;
        let parsed: Competition = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.competition_id, CompetitionId::new(9));
        assert!(parsed.match_updated.is_none());
        assert!(parsed.match_available.is_none());
    }
}
