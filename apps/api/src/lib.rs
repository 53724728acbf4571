//! Pitchside API Library
//!
//! Serves football competition statistics (competitions, fixtures, lineups
//! and computed league standings) from a directory of JSON documents.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
