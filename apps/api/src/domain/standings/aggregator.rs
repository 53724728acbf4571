use std::collections::HashMap;

use super::standing::{MatchResult, TeamStanding};

/// Builds a league table from the played matches of one competition season
///
/// Each team gets one row the first time its name appears. Rows are ranked
/// by points, then goal difference, then goals scored, all descending.
/// Teams level on all three keep the order in which they first appeared.
///
/// # Example
/// ```
/// use pitchside_api::domain::standings::{compute_standings, MatchResult};
///
/// let table = compute_standings(&[MatchResult::new("Spurs", "Chelsea", 2, 1)]);
///
/// assert_eq!(table[0].team(), "Spurs");
/// assert_eq!(table[1].points(), 0);
/// ```
pub fn compute_standings(matches: &[MatchResult]) -> Vec<TeamStanding> {
    let mut rows: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<TeamStanding> = Vec::new();

    for result in matches {
        let home = row_for(&mut rows, &mut table, &result.home_team);
        table[home].record(result.home_goals, result.away_goals);

        let away = row_for(&mut rows, &mut table, &result.away_team);
        table[away].record(result.away_goals, result.home_goals);
    }

    // sort_by is stable, so full ties stay in first-appearance order
    table.sort_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));
    table
}

fn row_for<'a>(
    rows: &mut HashMap<&'a str, usize>,
    table: &mut Vec<TeamStanding>,
    team: &'a str,
) -> usize {
    *rows.entry(team).or_insert_with(|| {
        table.push(TeamStanding::new(team));
        table.len() - 1
    })
}
