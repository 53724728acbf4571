use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::competition::{Competition, CompetitionId, SeasonId};

/// Repository trait for the competition catalogue
#[async_trait]
pub trait CompetitionRepository: Send + Sync {
    /// Every competition season in the catalogue, in stored order
    async fn list_all(&self) -> RepositoryResult<Vec<Competition>>;

    /// A single competition season, if the catalogue has it
    async fn find(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
    ) -> RepositoryResult<Option<Competition>> {
        let competitions = self.list_all().await?;
        Ok(competitions
            .into_iter()
            .find(|c| c.is(competition_id, season_id)))
    }
}
