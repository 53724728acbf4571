// Competition domain module
// Contains the competition-season record and free-text search over it

#![allow(clippy::module_inception)]

pub mod competition;

// Re-export main types for convenience
pub use crate::domain::ids::{CompetitionId, SeasonId};
pub use competition::{search, Competition};
