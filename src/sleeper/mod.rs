//! Sleeper matchup data: record types and the on-disk matchup cache.

pub mod load;
pub mod types;
