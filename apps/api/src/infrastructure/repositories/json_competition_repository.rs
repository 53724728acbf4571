use async_trait::async_trait;

use crate::domain::competition::Competition;
use crate::domain::repositories::{CompetitionRepository, RepositoryResult};
use crate::infrastructure::JsonFileStore;

/// Competition catalogue backed by `competitions.json`
pub struct JsonCompetitionRepository {
    store: JsonFileStore,
}

impl JsonCompetitionRepository {
    /// Creates a new JsonCompetitionRepository
    ///
    /// # Arguments
    /// * `store` - Handle on the data directory
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CompetitionRepository for JsonCompetitionRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<Competition>> {
        self.store.read(self.store.competitions_path()).await
    }
}
