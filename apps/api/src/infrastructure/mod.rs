// Infrastructure layer module
// Contains the JSON file store and the repository adapters over it
// Follows Hexagonal Architecture

pub mod json_store;
pub mod repositories;

pub use json_store::JsonFileStore;
