use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::fixture::MatchId;
use crate::domain::lineup::TeamLineup;

/// Repository trait for match lineups
#[async_trait]
pub trait LineupRepository: Send + Sync {
    /// Both teams' lineups for a match
    async fn find_by_match(&self, match_id: MatchId) -> RepositoryResult<Vec<TeamLineup>>;
}
