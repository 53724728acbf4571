use async_trait::async_trait;

use crate::domain::fixture::MatchId;
use crate::domain::lineup::TeamLineup;
use crate::domain::repositories::{LineupRepository, RepositoryResult};
use crate::infrastructure::JsonFileStore;

/// Match lineups backed by `lineups/<match_id>.json`
pub struct JsonLineupRepository {
    store: JsonFileStore,
}

impl JsonLineupRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LineupRepository for JsonLineupRepository {
    async fn find_by_match(&self, match_id: MatchId) -> RepositoryResult<Vec<TeamLineup>> {
        self.store.read(self.store.lineup_path(match_id)).await
    }
}
