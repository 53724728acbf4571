// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces over JSON files

pub mod json_competition_repository;
pub mod json_fixture_repository;
pub mod json_lineup_repository;

pub use json_competition_repository::JsonCompetitionRepository;
pub use json_fixture_repository::JsonFixtureRepository;
pub use json_lineup_repository::JsonLineupRepository;
