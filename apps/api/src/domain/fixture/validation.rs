use thiserror::Error;

use super::fixture::Fixture;
use crate::domain::ids::MatchId;
use crate::domain::standings::MatchResult;

/// A fixture whose data cannot be counted towards standings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureValidationError {
    #[error("Match {match_id} has an empty team name")]
    EmptyTeamName { match_id: MatchId },

    #[error("Match {match_id} has a negative score ({home}-{away})")]
    NegativeScore { match_id: MatchId, home: i64, away: i64 },

    #[error("Match {match_id} has no recorded score")]
    MissingScore { match_id: MatchId },

    #[error("Match {match_id} has a score out of range ({home}-{away})")]
    ScoreOutOfRange { match_id: MatchId, home: i64, away: i64 },
}

impl TryFrom<&Fixture> for MatchResult {
    type Error = FixtureValidationError;

    /// Converts a played fixture into aggregator input
    ///
    /// Unplayed fixtures (see [`Fixture::is_played`]) are filtered out by
    /// [`played_results`] before this runs.
    fn try_from(fixture: &Fixture) -> Result<Self, Self::Error> {
        let match_id = fixture.match_id;
        let home_team = fixture.home_team_name().trim();
        let away_team = fixture.away_team_name().trim();

        if home_team.is_empty() || away_team.is_empty() {
            return Err(FixtureValidationError::EmptyTeamName { match_id });
        }

        let (home, away) = match (fixture.home_score, fixture.away_score) {
            (Some(home), Some(away)) => (home, away),
            _ => return Err(FixtureValidationError::MissingScore { match_id }),
        };

        if home < 0 || away < 0 {
            return Err(FixtureValidationError::NegativeScore {
                match_id,
                home,
                away,
            });
        }

        let (Ok(home_goals), Ok(away_goals)) = (u32::try_from(home), u32::try_from(away))
        else {
            return Err(FixtureValidationError::ScoreOutOfRange {
                match_id,
                home,
                away,
            });
        };

        Ok(MatchResult::new(home_team, away_team, home_goals, away_goals))
    }
}

/// Validates a season's fixtures and keeps the played ones
///
/// Fixtures without a recorded score are skipped. The first invalid played
/// fixture aborts the whole season so a partial table is never produced.
///
/// Team names are trimmed of surrounding whitespace, so `" Roma "` and
/// `"Roma"` count as the same team and the table shows the trimmed name.
/// Any score that fits in a `u32` is accepted; standings totals are wide
/// enough to sum such scores without overflow.
pub fn played_results(
    fixtures: &[Fixture],
) -> Result<Vec<MatchResult>, FixtureValidationError> {
    let skipped = fixtures.iter().filter(|f| !f.is_played()).count();
    if skipped > 0 {
        tracing::warn!(skipped, "Skipping fixtures without a recorded score");
    }

    fixtures
        .iter()
        .filter(|f| f.is_played())
        .map(MatchResult::try_from)
        .collect()
}
