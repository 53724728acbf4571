use std::cmp::Ordering;

/// Points awarded for a win
pub const POINTS_FOR_WIN: u64 = 3;

/// Points awarded for a draw
pub const POINTS_FOR_DRAW: u64 = 1;

/// Final score of one played match
///
/// Values reaching this type have already passed boundary validation
/// (see `domain::fixture::validation`), so team names are non-empty and
/// goal counts are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchResult {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
        }
    }
}

/// Cumulative league record of one team
///
/// # Invariants
/// - `played() == won() + drawn() + lost()`
/// - `goal_difference() == goals_for() - goals_against()`
/// - `points() == 3 * won() + drawn()`
///
/// The derived figures are computed from the counters on every read, so they
/// can never drift from their inputs. Goal totals are `u64` and the goal
/// difference `i128`, so summing any number of `u32` scores cannot overflow.
///
/// # Example
/// ```
/// use pitchside_api::domain::standings::TeamStanding;
///
/// let mut standing = TeamStanding::new("Arsenal");
/// standing.record(2, 1);
/// standing.record(0, 0);
///
/// assert_eq!(standing.played(), 2);
/// assert_eq!(standing.points(), 4);
/// assert_eq!(standing.goal_difference(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    team: String,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u64,
    goals_against: u64,
}

impl TeamStanding {
    /// Creates an empty record for a team seen for the first time
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    /// Records one match from this team's perspective
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => self.won += 1,
            Ordering::Less => self.lost += 1,
            Ordering::Equal => self.drawn += 1,
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn played(&self) -> u64 {
        u64::from(self.won) + u64::from(self.drawn) + u64::from(self.lost)
    }

    pub fn won(&self) -> u32 {
        self.won
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn lost(&self) -> u32 {
        self.lost
    }

    pub fn goals_for(&self) -> u64 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u64 {
        self.goals_against
    }

    pub fn goal_difference(&self) -> i128 {
        i128::from(self.goals_for) - i128::from(self.goals_against)
    }

    pub fn points(&self) -> u64 {
        POINTS_FOR_WIN * u64::from(self.won) + POINTS_FOR_DRAW * u64::from(self.drawn)
    }

    /// Composite ranking key: points, then goal difference, then goals scored
    pub fn ranking_key(&self) -> (u64, i128, u64) {
        (self.points(), self.goal_difference(), self.goals_for)
    }
}
