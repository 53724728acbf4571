// Fixture domain module
// Raw match records from the season documents and the boundary check that
// turns them into standings input

#![allow(clippy::module_inception)]

pub mod fixture;
pub mod validation;

pub use crate::domain::ids::MatchId;
pub use fixture::{AwayTeam, Fixture, HomeTeam, NamedRef};
pub use validation::{played_results, FixtureValidationError};
