// Standings domain module
// League table aggregation over played match results

pub mod aggregator;
pub mod standing;

pub use aggregator::compute_standings;
pub use standing::{MatchResult, TeamStanding};
