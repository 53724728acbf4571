use std::sync::Arc;

use crate::domain::repositories::{CompetitionRepository, FixtureRepository, LineupRepository};
use crate::infrastructure::repositories::{
    JsonCompetitionRepository, JsonFixtureRepository, JsonLineupRepository,
};
use crate::infrastructure::JsonFileStore;

/// Shared handler state: one repository per aggregate
#[derive(Clone)]
pub struct AppState {
    pub competitions: Arc<dyn CompetitionRepository>,
    pub fixtures: Arc<dyn FixtureRepository>,
    pub lineups: Arc<dyn LineupRepository>,
}

impl AppState {
    pub fn new(
        competitions: Arc<dyn CompetitionRepository>,
        fixtures: Arc<dyn FixtureRepository>,
        lineups: Arc<dyn LineupRepository>,
    ) -> Self {
        Self {
            competitions,
            fixtures,
            lineups,
        }
    }

    /// Wires every repository to JSON documents under one data directory
    pub fn from_store(store: JsonFileStore) -> Self {
        Self::new(
            Arc::new(JsonCompetitionRepository::new(store.clone())),
            Arc::new(JsonFixtureRepository::new(store.clone())),
            Arc::new(JsonLineupRepository::new(store)),
        )
    }
}
