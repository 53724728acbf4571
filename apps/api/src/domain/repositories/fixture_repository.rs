use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::competition::{CompetitionId, SeasonId};
use crate::domain::fixture::{Fixture, MatchId};

/// Repository trait for season fixture lists
#[async_trait]
pub trait FixtureRepository: Send + Sync {
    /// All fixtures of one competition season, in stored order
    async fn find_by_season(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
    ) -> RepositoryResult<Vec<Fixture>>;

    /// One fixture of a competition season
    async fn find_match(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
        match_id: MatchId,
    ) -> RepositoryResult<Option<Fixture>> {
        let fixtures = self.find_by_season(competition_id, season_id).await?;
        Ok(fixtures.into_iter().find(|f| f.match_id == match_id))
    }
}
