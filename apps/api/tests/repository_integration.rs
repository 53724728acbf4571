//! Integration tests for repository layer
//!
//! These tests verify that the JSON repository implementations read the
//! data directory layout correctly, including missing and malformed
//! documents.

use pitchside_api::domain::competition::{CompetitionId, SeasonId};
use pitchside_api::domain::fixture::MatchId;
use pitchside_api::domain::repositories::{
    CompetitionRepository, FixtureRepository, LineupRepository, RepositoryError,
};
use pitchside_api::infrastructure::repositories::{
    JsonCompetitionRepository, JsonFixtureRepository, JsonLineupRepository,
};
use pitchside_api::infrastructure::JsonFileStore;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

/// Write a JSON document below the data directory
fn write_json(root: &Path, relative: &str, value: &serde_json::Value) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("document has a parent"))
        .expect("Failed to create data directory");
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap())
        .expect("Failed to write data file");
}

/// Set up a data directory with one competition season
fn setup_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    write_json(
        dir.path(),
        "competitions.json",
        &json!([
            {
                "competition_id": 43,
                "season_id": 3,
                "country_name": "International",
                "competition_name": "FIFA World Cup",
                "competition_gender": "male",
                "competition_youth": false,
                "competition_international": true,
                "season_name": "2018",
                "match_updated": "2023-04-26T23:49:58.956186",
                "match_updated_360": null,
                "match_available_360": null,
                "match_available": "2023-04-26T23:49:58.956186"
            },
            {
                "competition_id": 2,
                "season_id": 27,
                "country_name": "England",
                "competition_name": "Premier League",
                "competition_gender": "male",
                "competition_youth": false,
                "competition_international": false,
                "season_name": "2015/2016"
            }
        ]),
    );

    write_json(
        dir.path(),
        "matches/43/3.json",
        &json!([
            {
                "match_id": 7525,
                "match_date": "2018-06-15",
                "kick_off": "20:00:00.000",
                "home_team": { "home_team_id": 780, "home_team_name": "Portugal" },
                "away_team": { "away_team_id": 772, "away_team_name": "Spain" },
                "home_score": 3,
                "away_score": 3,
                "match_status": "available"
            },
            {
                "match_id": 7298,
                "match_date": "2018-06-14",
                "home_team": { "home_team_id": 796, "home_team_name": "Russia" },
                "away_team": { "away_team_id": 799, "away_team_name": "Saudi Arabia" },
                "home_score": 5,
                "away_score": 0
            }
        ]),
    );

    write_json(
        dir.path(),
        "lineups/7298.json",
        &json!([
            { "team_id": 796, "team_name": "Russia", "lineup": [] },
            { "team_id": 799, "team_name": "Saudi Arabia", "lineup": [] }
        ]),
    );

    dir
}

#[tokio::test]
async fn test_list_competitions() {
    let dir = setup_data_dir();
    let repo = JsonCompetitionRepository::new(JsonFileStore::new(dir.path()));

    let competitions = repo.list_all().await.expect("list competitions");

    assert_eq!(competitions.len(), 2);
    assert_eq!(competitions[0].competition_name, "FIFA World Cup");
    assert_eq!(competitions[1].match_updated, None);
}

#[tokio::test]
async fn test_find_competition_season() {
    let dir = setup_data_dir();
    let repo = JsonCompetitionRepository::new(JsonFileStore::new(dir.path()));

    let found = repo
        .find(CompetitionId::new(2), SeasonId::new(27))
        .await
        .expect("find competition");
    assert_eq!(found.map(|c| c.country_name), Some("England".to_string()));

    let missing = repo
        .find(CompetitionId::new(2), SeasonId::new(44))
        .await
        .expect("find competition");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_missing_competitions_file() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonCompetitionRepository::new(JsonFileStore::new(dir.path()));

    let err = repo.list_all().await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_fixtures_by_season_keep_file_order() {
    let dir = setup_data_dir();
    let repo = JsonFixtureRepository::new(JsonFileStore::new(dir.path()));

    let fixtures = repo
        .find_by_season(CompetitionId::new(43), SeasonId::new(3))
        .await
        .expect("find fixtures");

    let ids: Vec<MatchId> = fixtures.iter().map(|f| f.match_id).collect();
    assert_eq!(ids, vec![MatchId::new(7525), MatchId::new(7298)]);
}

#[tokio::test]
async fn test_find_single_fixture() {
    let dir = setup_data_dir();
    let repo = JsonFixtureRepository::new(JsonFileStore::new(dir.path()));

    let fixture = repo
        .find_match(CompetitionId::new(43), SeasonId::new(3), MatchId::new(7298))
        .await
        .expect("find fixture")
        .expect("fixture exists");
    assert_eq!(fixture.home_team_name(), "Russia");

    let missing = repo
        .find_match(CompetitionId::new(43), SeasonId::new(3), MatchId::new(1))
        .await
        .expect("find fixture");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_unknown_season_is_not_found() {
    let dir = setup_data_dir();
    let repo = JsonFixtureRepository::new(JsonFileStore::new(dir.path()));

    let err = repo
        .find_by_season(CompetitionId::new(43), SeasonId::new(106))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_season_document() {
    let dir = setup_data_dir();
    write_json(dir.path(), "matches/11/90.json", &json!({ "not": "a list" }));
    let repo = JsonFixtureRepository::new(JsonFileStore::new(dir.path()));

    let err = repo
        .find_by_season(CompetitionId::new(11), SeasonId::new(90))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Malformed { .. }));
}

#[tokio::test]
async fn test_lineups_by_match() {
    let dir = setup_data_dir();
    let repo = JsonLineupRepository::new(JsonFileStore::new(dir.path()));

    let lineups = repo
        .find_by_match(MatchId::new(7298))
        .await
        .expect("find lineups");
    assert_eq!(lineups.len(), 2);
    assert_eq!(lineups[1].team_name, "Saudi Arabia");

    let err = repo.find_by_match(MatchId::new(7525)).await.unwrap_err();
    assert!(err.is_not_found());
}
