// Lineup domain module
// Per-team squad sheets from `lineups/<match_id>.json`

#![allow(clippy::module_inception)]

pub mod lineup;

pub use lineup::{Booking, Country, LineupPlayer, PositionSpell, TeamLineup};
