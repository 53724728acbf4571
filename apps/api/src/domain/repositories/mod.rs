// Repository interfaces (ports)
// Implemented by the JSON file store in infrastructure

pub mod competition_repository;
pub mod errors;
pub mod fixture_repository;
pub mod lineup_repository;

pub use competition_repository::CompetitionRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use fixture_repository::FixtureRepository;
pub use lineup_repository::LineupRepository;
