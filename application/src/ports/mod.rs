//! Ports — interfaces the application layer depends on.

pub mod status_store;
pub mod team_roster;
