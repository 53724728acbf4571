// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod competition;
pub mod fixture;
pub mod ids;
pub mod lineup;
pub mod repositories;
pub mod standings;
