use async_trait::async_trait;

use crate::domain::competition::{CompetitionId, SeasonId};
use crate::domain::fixture::Fixture;
use crate::domain::repositories::{FixtureRepository, RepositoryResult};
use crate::infrastructure::JsonFileStore;

/// Season fixture lists backed by `matches/<competition>/<season>.json`
pub struct JsonFixtureRepository {
    store: JsonFileStore,
}

impl JsonFixtureRepository {
    /// Creates a new JsonFixtureRepository
    ///
    /// # Arguments
    /// * `store` - Handle on the data directory
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FixtureRepository for JsonFixtureRepository {
    async fn find_by_season(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
    ) -> RepositoryResult<Vec<Fixture>> {
        let path = self.store.season_path(competition_id, season_id);
        self.store.read(path).await
    }
}
